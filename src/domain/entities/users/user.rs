//! User Entity Implementation
//!
//! 자격 증명 저장소(Credential Store)에 저장되는 사용자 엔티티입니다.
//! 삭제는 `deleted_at` 타임스탬프로 표시하는 소프트 삭제 방식입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// `Some`이면 소프트 삭제된 계정
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl User {
    pub fn new_local(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        now: DateTime,
    ) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            first_name,
            last_name,
            role: Role::User,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
