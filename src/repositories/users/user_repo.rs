//! # 사용자 리포지토리 MongoDB 구현
//!
//! `users` 컬렉션을 사용합니다. 소프트 삭제된 계정이 같은 이메일을 가질 수 있으므로
//! 이메일 인덱스는 유니크가 아니며, 활성 계정 중복은 서비스 계층에서 막습니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_idx".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        // `deleted_at: null`은 필드가 없는 문서도 매칭
        self.collection
            .find_one(doc! { "email": email, "deleted_at": null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted user id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update_password_hash(
        &self,
        id: &ObjectId,
        expected_hash: &str,
        new_hash: &str,
        now: DateTime,
    ) -> AppResult<bool> {
        let result = self.collection
            .update_one(
                doc! { "_id": id, "password_hash": expected_hash },
                doc! { "$set": { "password_hash": new_hash, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn soft_delete(&self, id: &ObjectId, now: DateTime) -> AppResult<bool> {
        let result = self.collection
            .update_one(
                doc! { "_id": id, "deleted_at": null },
                doc! { "$set": { "deleted_at": now, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}
