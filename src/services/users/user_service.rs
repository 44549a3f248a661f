//! # 사용자 서비스
//!
//! 인증된 principal에 해당하는 사용자 정보를 돌려주고, 관리자용 ID 조회를 제공합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::CurrentUserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::users::UserRepository;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_current_user(&self, principal: &AuthenticatedUser) -> AppResult<CurrentUserResponse> {
        let user = self
            .users
            .find_active_by_email(&principal.email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(CurrentUserResponse::from(user))
    }

    /// 관리자 조회용. 삭제된 사용자와 잘못된 ID는 모두 404.
    pub async fn get_user_by_id(&self, user_id: &str) -> AppResult<CurrentUserResponse> {
        let not_found = || AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user_id));

        let id = ObjectId::parse_str(user_id).map_err(|_| not_found())?;
        let user = self
            .users
            .find_by_id(&id)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or_else(not_found)?;

        Ok(CurrentUserResponse::from(user))
    }
}
