//! 도메인 계층: 엔티티, 모델, DTO

pub mod dto;
pub mod entities;
pub mod models;

pub use entities::{PasswordResetToken, User};
pub use models::{AuthenticatedUser, OptionalUser, Role, TokenClaims};
