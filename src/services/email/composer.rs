//! 비밀번호 재설정 메일 작성기

use chrono::Duration;

use crate::config::FrontendConfig;
use crate::services::email::EmailMessage;

pub struct PasswordResetEmailComposer {
    frontend: FrontendConfig,
    token_ttl: Duration,
}

impl PasswordResetEmailComposer {
    pub const SUBJECT: &'static str = "Reset your password";

    pub fn new(frontend: FrontendConfig, token_ttl: Duration) -> Self {
        Self { frontend, token_ttl }
    }

    pub fn compose(&self, to: &str, token: &str) -> EmailMessage {
        let link = self.frontend.reset_link(token);
        let body = format!(
            "<p>Hello,</p>\
             <p>We received a request to reset your password.</p>\
             <p><a href=\"{link}\">Click here to reset your password</a></p>\
             <p>This link will expire in {minutes} minutes.</p>\
             <p>If you did not request a password reset, you can safely ignore this email.</p>",
            link = link,
            minutes = self.token_ttl.num_minutes(),
        );

        EmailMessage {
            to: to.to_string(),
            subject: Self::SUBJECT.to_string(),
            body,
            html: true,
        }
    }
}
