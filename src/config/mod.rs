//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 읽어 [`AppSettings`]로 묶습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 데이터베이스, 저장소 백엔드, 서버, bcrypt 설정
//! - [`auth_config`] - JWT, 비밀번호 재설정, 프론트엔드 링크, 공개 라우트, 메일 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서 `JWT_SECRET`이 없으면 시작 실패
//! - 전역 상태 없이 생성자 주입으로만 전달
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_MINUTES="30"
//! export PASSWORD_RESET_TTL_MINUTES="15"
//! export FRONTEND_BASE_URL="https://app.example.com"
//! export FRONTEND_RESET_PASSWORD_PATH="/reset-password"
//! export PUBLIC_ROUTE_PREFIXES="/auth/,/health"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="taskboard"
//! export MAIL_ENABLED="true"
//! export SMTP_HOST="smtp.example.com"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use crate::core::errors::AppResult;

/// 애플리케이션 시작 시 한 번 만들어지는 설정 묶음
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub password_reset: PasswordResetConfig,
    pub frontend: FrontendConfig,
    pub public_routes: PublicRoutes,
    pub mail: MailConfig,
    pub bcrypt_cost: u32,
    pub storage: StorageBackend,
    pub database: DatabaseConfig,
}

impl AppSettings {
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::current();

        Ok(Self {
            jwt: JwtConfig::from_env(&environment)?,
            password_reset: PasswordResetConfig::from_env(),
            frontend: FrontendConfig::from_env(),
            public_routes: PublicRoutes::from_env(),
            mail: MailConfig::from_env(&environment)?,
            bcrypt_cost: PasswordConfig::bcrypt_cost(&environment),
            storage: StorageBackend::current(),
            database: DatabaseConfig::from_env(),
            environment,
        })
    }
}
