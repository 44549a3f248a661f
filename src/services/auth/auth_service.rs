//! 로그인/회원가입 서비스
//!
//! 로그인은 활성 사용자만 대상으로 하고, 이메일이 없거나 비밀번호가 틀린 경우를
//! 구분하지 않고 같은 [`AuthError::BadCredentials`]로 응답합니다.

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::errors::{AppError, AppResult, AuthError};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{LoginResponse, UserResponse};
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::{mask_email, normalize_email};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    hasher: PasswordHasher,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        hasher: PasswordHasher,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            token_service,
            hasher,
            clock,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let email = normalize_email(&request.email);

        if self.users.exists_active_by_email(&email).await? {
            log::info!("회원가입 거부 (이메일 중복): {}", mask_email(&email));
            return Err(AppError::ConflictError("Email is already in use".to_string()));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new_local(
            email,
            password_hash,
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            self.clock.now_bson(),
        );

        let created = self.users.create(user).await?;
        log::info!("회원가입 완료: {}", mask_email(&created.email));

        Ok(UserResponse::from(created))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let email = normalize_email(&request.email);

        let user = self
            .users
            .find_active_by_email(&email)
            .await?
            .ok_or(AuthError::BadCredentials)?;

        if !self.hasher.verify(&request.password, &user.password_hash) {
            log::warn!("로그인 실패: {}", mask_email(&email));
            return Err(AuthError::BadCredentials.into());
        }

        let token = self.token_service.issue(&user.email, user.role)?;
        log::info!("로그인 성공: {}", mask_email(&user.email));

        Ok(LoginResponse { token })
    }
}
