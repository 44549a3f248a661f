//! # 메모리 저장소
//!
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 서버를 띄우거나 테스트할 때 쓰는 구현입니다.
//! 프로세스가 끝나면 데이터도 사라집니다.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::reset_tokens::PasswordResetToken;
use crate::domain::entities::users::User;
use crate::repositories::reset_tokens::ResetTokenRepository;
use crate::repositories::users::UserRepository;

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("in-memory store lock poisoned".to_string())
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users
            .values()
            .find(|user| user.email == email && !user.is_deleted())
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_password_hash(
        &self,
        id: &ObjectId,
        expected_hash: &str,
        new_hash: &str,
        now: DateTime,
    ) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;
        match users.get_mut(id) {
            Some(user) if user.password_hash == expected_hash => {
                user.password_hash = new_hash.to_string();
                user.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &ObjectId, now: DateTime) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;
        match users.get_mut(id) {
            Some(user) if !user.is_deleted() => {
                user.deleted_at = Some(now);
                user.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryResetTokenRepository {
    tokens: Mutex<HashMap<String, PasswordResetToken>>,
}

impl InMemoryResetTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 모든 토큰의 복사본
    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<PasswordResetToken> {
        self.tokens.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl ResetTokenRepository for InMemoryResetTokenRepository {
    async fn insert(&self, mut token: PasswordResetToken) -> AppResult<PasswordResetToken> {
        let mut tokens = self.tokens.lock().map_err(poisoned)?;
        if tokens.contains_key(&token.token) {
            return Err(AppError::DatabaseError("duplicate reset token".to_string()));
        }
        token.id.get_or_insert_with(ObjectId::new);
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>> {
        let tokens = self.tokens.lock().map_err(poisoned)?;
        Ok(tokens.get(token).cloned())
    }

    async fn consume_if_unused(&self, token: &str, now: DateTime) -> AppResult<bool> {
        let mut tokens = self.tokens.lock().map_err(poisoned)?;
        match tokens.get_mut(token) {
            Some(entry) if !entry.is_used() => {
                entry.mark_used(now);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
