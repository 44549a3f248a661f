//! 요청 범위 Principal
//!
//! Access Filter가 유효한 토큰을 확인하면 [`AuthenticatedUser`]를 요청 extension에 넣고,
//! 핸들러는 extractor로 꺼내 씁니다. 요청이 끝나면 함께 버려집니다.
use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::auth::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            email: user.email.clone(),
            role: user.role,
            authorities: vec![user.role.authority()],
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.authorities.contains(&role.authority())
    }

    /// 역할이 없으면 403으로 매핑되는 [`AppError::AuthorizationError`]
    pub fn require_role(&self, role: Role) -> Result<(), AppError> {
        if self.has_role(role) {
            Ok(())
        } else {
            log::warn!("권한 부족: 사용자 ID {} ({}), 필요 권한: {}", self.user_id, self.role, role);
            Err(AppError::AuthorizationError(
                "Access denied - insufficient permissions".to_string(),
            ))
        }
    }
}

/// 인증이 필요한 핸들러용 extractor. principal이 없으면 401.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication required".to_string(),
            )
            .into())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
