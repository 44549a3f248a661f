//! User HTTP Handlers
//!
//! 인증이 필요한 사용자 엔드포인트입니다. principal이 없으면 extractor가 401을 반환합니다.
//!
//! - `GET /users/me` - 로그인한 사용자
//! - `GET /users/{id}` - ADMIN 전용, 그 외 역할은 403
use actix_web::{get, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthenticatedUser, Role};
use crate::services::users::UserService;

/// `GET /users/me`
#[get("/me")]
pub async fn get_current_user(
    user_service: web::Data<UserService>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_current_user(&principal).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("/{id}")]
pub async fn get_user_by_id(
    user_service: web::Data<UserService>,
    principal: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    principal.require_role(Role::Admin)?;

    let user = user_service.get_user_by_id(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
