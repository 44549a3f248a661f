//! # 자격 증명 저장소 (Credential Store)
//!
//! 사용자 레코드 조회/저장 계약입니다. 인증 코어는 이 트레이트만 알고,
//! 실제 저장소는 MongoDB([`MongoUserRepository`]) 또는 메모리 구현이 맡습니다.
//!
//! "활성" 사용자는 `deleted_at`이 비어 있는 사용자입니다.

pub mod user_repo;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub use user_repo::MongoUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 소프트 삭제되지 않은 사용자 중 이메일로 조회
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_active_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_active_by_email(email).await?.is_some())
    }

    /// 삭제 여부와 무관하게 ID로 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 저장 후 ID가 채워진 사용자를 반환
    async fn create(&self, user: User) -> AppResult<User>;

    /// 저장된 해시가 `expected_hash`일 때만 `new_hash`로 바꿉니다.
    /// 대상이 없거나 그 사이 다른 값으로 바뀌었으면 `false`.
    async fn update_password_hash(
        &self,
        id: &ObjectId,
        expected_hash: &str,
        new_hash: &str,
        now: DateTime,
    ) -> AppResult<bool>;

    /// `deleted_at`을 기록합니다. 대상이 없으면 `false`.
    async fn soft_delete(&self, id: &ObjectId, now: DateTime) -> AppResult<bool>;
}
