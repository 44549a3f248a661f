//! # Application Error Handling
//!
//! 인증 코어와 그 주변 계층에서 사용하는 에러 타입입니다.
//!
//! 에러는 두 층으로 나뉩니다.
//!
//! - [`AuthError`]: 토큰 코덱과 비밀번호 재설정 흐름이 돌려주는 도메인 에러.
//!   예외를 던지는 대신 `Result`의 태그로 호출자에게 전달됩니다.
//! - [`AppError`]: 애플리케이션 전역 에러. `actix_web::ResponseError`를 구현해
//!   핸들러에서 `?`로 반환하면 곧바로 `{"error": "<message>"}` 형태의 응답이 됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `Auth(InvalidToken)` | 400 Bad Request | 형식 오류/알 수 없는 재설정 토큰 |
//! | `Auth(TokenExpired)` | 400 Bad Request | 만료된 재설정 토큰 |
//! | `Auth(TokenAlreadyUsed)` | 400 Bad Request | 이미 사용된 재설정 토큰 |
//! | `Auth(BadCredentials)` | 401 Unauthorized | 로그인 실패 |
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 이미 사용 중인 이메일 |
//! | `AuthenticationError` | 401 Unauthorized | 인증 필요 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 메일 발송 등 외부 연동 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 인증/자격 증명 복구 흐름의 에러 분류
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// 형식이 잘못되었거나 서명이 맞지 않는 토큰, 존재하지 않는 재설정 토큰
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token has already been used")]
    TokenAlreadyUsed,

    /// 로그인 전용
    #[error("Invalid credentials")]
    BadCredentials,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::BadCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::TokenAlreadyUsed => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ConflictError(String),

    #[error("{0}")]
    AuthenticationError(String),

    #[error("{0}")]
    AuthorizationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(err) => err.status_code(),
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러에 문맥을 덧붙여 [`AppError::InternalError`]로 변환
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
