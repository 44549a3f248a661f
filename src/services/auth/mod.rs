//! 인증 코어 서비스: 토큰 코덱, 비밀번호 해싱, 로그인/회원가입, 재설정 토큰 원장과 재설정 흐름

pub mod auth_service;
pub mod password_hasher;
pub mod password_reset_service;
pub mod reset_token_ledger;
pub mod token_service;

pub use auth_service::AuthService;
pub use password_hasher::PasswordHasher;
pub use password_reset_service::PasswordResetService;
pub use reset_token_ledger::ResetTokenLedger;
pub use token_service::TokenService;
