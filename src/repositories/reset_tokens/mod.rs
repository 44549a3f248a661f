//! # 비밀번호 재설정 토큰 저장소
//!
//! 원장은 토큰을 삭제하지 않습니다. 소비는 [`ResetTokenRepository::consume_if_unused`] 한 번의
//! 원자적 조건부 갱신(`used_at`이 비어 있을 때만 기록)으로만 이뤄집니다.

pub mod reset_token_repo;

use async_trait::async_trait;
use mongodb::bson::DateTime;

use crate::core::errors::AppResult;
use crate::domain::entities::reset_tokens::PasswordResetToken;

pub use reset_token_repo::MongoResetTokenRepository;

#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    async fn insert(&self, token: PasswordResetToken) -> AppResult<PasswordResetToken>;

    async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>>;

    /// `used_at`이 비어 있으면 `now`로 채우고 `true`, 이미 소비되었거나 없으면 `false`.
    async fn consume_if_unused(&self, token: &str, now: DateTime) -> AppResult<bool>;
}
