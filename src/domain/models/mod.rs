//! 저장되지 않는 도메인 모델: 토큰 클레임, 요청 범위 principal, 역할

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
