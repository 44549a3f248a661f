use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::services::email::{EmailMessage, EmailSender};

/// 보낸 메일을 기록만 하는 발송기
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingEmailSender {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// 항상 실패하는 발송기
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _message: EmailMessage) -> AppResult<()> {
        Err(AppError::ExternalServiceError("Failed to send email: connection refused".to_string()))
    }
}
