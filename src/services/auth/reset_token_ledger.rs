//! 비밀번호 재설정 토큰 원장
//!
//! 사용자별 재설정 토큰을 발급하고 조회하며, 한 번만 소비되도록 보장합니다.
//! 같은 사용자에게 소비되지 않은 토큰이 여러 개 있어도 이전 토큰을 무효화하지 않습니다.

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::core::clock::Clock;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::reset_tokens::PasswordResetToken;
use crate::domain::entities::users::User;
use crate::repositories::reset_tokens::ResetTokenRepository;

pub struct ResetTokenLedger {
    tokens: Arc<dyn ResetTokenRepository>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ResetTokenLedger {
    pub fn new(tokens: Arc<dyn ResetTokenRepository>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self { tokens, clock, ttl }
    }

    /// 새 식별자로 `expires_at = now + TTL`, `used_at = None`인 항목을 저장합니다.
    pub async fn create(&self, user: &User) -> AppResult<PasswordResetToken> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let entry = PasswordResetToken::issue(user_id, self.clock.now_bson(), self.ttl);
        self.tokens.insert(entry).await
    }

    pub async fn find_by_identifier(&self, id: &Uuid) -> AppResult<Option<PasswordResetToken>> {
        self.tokens.find_by_token(&id.hyphenated().to_string()).await
    }

    /// 아직 소비되지 않았다면 지금 시각으로 소비 처리하고 `true`.
    /// 동시에 호출되어도 하나만 `true`를 받습니다.
    pub async fn consume_if_unused(&self, id: &Uuid) -> AppResult<bool> {
        self.tokens
            .consume_if_unused(&id.hyphenated().to_string(), self.clock.now_bson())
            .await
    }
}
