//! # 사용자/인증 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON을 구조화된 타입으로 변환하고 `validator`로 검증합니다.
//! 검증 실패는 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod auth_request;
pub mod create_user_request;

pub use auth_request::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest};
pub use create_user_request::RegisterRequest;
