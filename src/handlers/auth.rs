//! Authentication HTTP Handlers
//!
//! - `POST /auth/register` - 로컬 회원가입
//! - `POST /auth/login` - 이메일/비밀번호 로그인, JWT 발급
//! - `POST /auth/forgot-password` - 재설정 링크 메일 요청
//! - `POST /auth/reset-password` - 재설정 토큰으로 비밀번호 변경
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::domain::dto::users::response::MessageResponse;
use crate::services::auth::{AuthService, PasswordResetService};

pub const FORGOT_PASSWORD_MESSAGE: &str = "Password reset link will be sent in few minutes.";
pub const RESET_PASSWORD_MESSAGE: &str = "Password has been reset successfully";

#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/forgot-password")]
pub async fn forgot_password(
    password_reset_service: web::Data<PasswordResetService>,
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    password_reset_service.forgot_password(&payload.email).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(FORGOT_PASSWORD_MESSAGE)))
}

#[post("/reset-password")]
pub async fn reset_password(
    password_reset_service: web::Data<PasswordResetService>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    password_reset_service
        .reset_password(&payload.token, &payload.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(RESET_PASSWORD_MESSAGE)))
}
