//! Password Reset Token Entity
//!
//! 비밀번호 재설정 원장(Reset Token Ledger)의 한 행입니다.
//! 생성 시 한 번 저장되고, 소비될 때 `used_at`이 한 번 채워지며, 감사 기록으로 삭제하지 않습니다.

use chrono::Duration;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 하이픈 포함 소문자 UUID v4
    pub token: String,
    pub user_id: ObjectId,
    pub created_at: DateTime,
    pub expires_at: DateTime,
    /// `None`이면 아직 소비되지 않은 토큰
    #[serde(default)]
    pub used_at: Option<DateTime>,
}

impl PasswordResetToken {
    /// 새 식별자를 생성하고 `expires_at = now + ttl`로 설정합니다.
    pub fn issue(user_id: ObjectId, now: DateTime, ttl: Duration) -> Self {
        Self {
            id: None,
            token: Uuid::new_v4().hyphenated().to_string(),
            user_id,
            created_at: now,
            expires_at: DateTime::from_millis(now.timestamp_millis() + ttl.num_milliseconds()),
            used_at: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// `now >= expires_at`이면 만료
    pub fn is_expired(&self, now: DateTime) -> bool {
        now >= self.expires_at
    }

    pub fn mark_used(&mut self, now: DateTime) {
        self.used_at = Some(now);
    }
}
