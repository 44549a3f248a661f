//! # 재설정 토큰 리포지토리 MongoDB 구현
//!
//! `password_reset_tokens` 컬렉션. `token` 필드는 유니크 인덱스로 보호됩니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::reset_tokens::PasswordResetToken;
use crate::repositories::reset_tokens::ResetTokenRepository;

pub struct MongoResetTokenRepository {
    collection: Collection<PasswordResetToken>,
}

impl MongoResetTokenRepository {
    pub const COLLECTION: &'static str = "password_reset_tokens";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_idx".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([token_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ResetTokenRepository for MongoResetTokenRepository {
    async fn insert(&self, mut token: PasswordResetToken) -> AppResult<PasswordResetToken> {
        let result = self.collection
            .insert_one(&token)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        token.id = result.inserted_id.as_object_id();

        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>> {
        self.collection
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn consume_if_unused(&self, token: &str, now: DateTime) -> AppResult<bool> {
        // 단일 문서 findOneAndUpdate는 원자적이므로 동시 요청 중 하나만 성공
        let previous = self.collection
            .find_one_and_update(
                doc! { "token": token, "used_at": null },
                doc! { "$set": { "used_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(previous.is_some())
    }
}
