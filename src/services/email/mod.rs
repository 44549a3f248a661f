//! # 메일 발송
//!
//! 인증 코어는 [`EmailSender`] 트레이트로만 메일을 보냅니다.
//! 운영 구현은 SMTP 릴레이를 쓰는 [`SmtpEmailSender`]이고,
//! 재설정 메일 본문은 [`PasswordResetEmailComposer`]가 만듭니다.

pub mod composer;
pub mod smtp_sender;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::core::errors::AppResult;

pub use composer::PasswordResetEmailComposer;
pub use smtp_sender::SmtpEmailSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// `true`면 HTML 본문
    pub html: bool,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// 발송 실패는 [`crate::core::errors::AppError::ExternalServiceError`]로 반환됩니다.
    async fn send(&self, message: EmailMessage) -> AppResult<()>;
}
