//! SMTP 메일 발송기 (lettre)
//!
//! `lettre`의 전송은 블로킹 I/O이므로 `web::block`으로 워커 스레드 밖에서 실행하고,
//! 연결/응답 대기는 10초로 제한합니다. 메일 발송이 꺼져 있으면 로그만 남깁니다.

use std::time::Duration;

use actix_web::web;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::services::email::{EmailMessage, EmailSender};
use crate::utils::string_utils::mask_email;

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SmtpEmailSender {
    from: Mailbox,
    transport: Option<SmtpTransport>,
}

impl SmtpEmailSender {
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let from = config
            .from
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid MAIL_FROM address '{}'", config.from))?;

        let transport = if config.enabled {
            let mut builder = SmtpTransport::relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(config.smtp_port)
                .timeout(Some(SMTP_TIMEOUT));
            if !config.username.is_empty() {
                builder = builder.credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ));
            }
            Some(builder.build())
        } else {
            None
        };

        Ok(Self { from, transport })
    }

    fn build_message(&self, message: &EmailMessage) -> AppResult<Message> {
        let to = message
            .to
            .parse::<Mailbox>()
            .map_err(|e| AppError::ExternalServiceError(format!("Invalid recipient address: {}", e)))?;
        let content_type = if message.html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(content_type)
            .body(message.body.clone())
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to create email: {}", e)))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        let Some(transport) = self.transport.clone() else {
            log::info!("SMTP sending is disabled; skipping email to {}", mask_email(&message.to));
            return Ok(());
        };

        let email = self.build_message(&message)?;

        web::block(move || transport.send(&email))
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Email task failed: {}", e)))?
            .map_err(|e| {
                log::error!("Failed to send email to {}: {}", mask_email(&message.to), e);
                AppError::ExternalServiceError(format!("Failed to send email: {}", e))
            })?;

        log::info!("Email sent successfully to: {}", mask_email(&message.to));
        Ok(())
    }
}
