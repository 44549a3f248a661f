//! 영속화되는 도메인 엔티티

pub mod reset_tokens;
pub mod users;

pub use reset_tokens::PasswordResetToken;
pub use users::User;
