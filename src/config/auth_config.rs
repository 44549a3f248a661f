//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 키와 유효 기간, 비밀번호 재설정 토큰, 프론트엔드 링크,
//! 공개 라우트 목록, 메일 발송 설정을 환경 변수에서 읽어 구조체로 만듭니다.
//! 모든 값은 시작 시 한 번 읽혀 서비스 생성자에 주입됩니다.

use std::env;

use chrono::Duration;

use crate::config::data_config::{env_or, env_parse_or, split_list, Environment};
use crate::core::errors::{AppError, AppResult};

const DEV_FALLBACK_SECRET: &str = "dev-only-secret-change-me-dev-only-secret";

/// JWT 액세스 토큰 설정
///
/// # 보안 요구사항
///
/// - HS256 서명이므로 최소 256비트 (32바이트) 길이의 키 권장
/// - 환경별로 다른 키 사용
///
/// ```bash
/// openssl rand -base64 32
/// ```
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: Duration,
}

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_MINUTES: i64 = 30;

    pub fn new(secret: impl Into<String>, expiration: Duration) -> Self {
        Self {
            secret: secret.into(),
            expiration,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_MINUTES`를 읽습니다.
    ///
    /// 프로덕션 환경에서 `JWT_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고 로그와 함께 개발용 키를 사용합니다.
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::InternalError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_FALLBACK_SECRET.to_string()
            }
        };

        let minutes = env_parse_or("JWT_EXPIRATION_MINUTES", Self::DEFAULT_EXPIRATION_MINUTES);

        Ok(Self::new(secret, Duration::minutes(minutes)))
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration", &self.expiration)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    pub token_ttl: Duration,
}

impl PasswordResetConfig {
    pub const DEFAULT_TTL_MINUTES: i64 = 15;

    pub fn from_env() -> Self {
        Self {
            token_ttl: Duration::minutes(env_parse_or(
                "PASSWORD_RESET_TTL_MINUTES",
                Self::DEFAULT_TTL_MINUTES,
            )),
        }
    }
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::minutes(Self::DEFAULT_TTL_MINUTES),
        }
    }
}

/// 재설정 링크를 만들 때 사용하는 프론트엔드 주소
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub base_url: String,
    pub reset_password_path: String,
}

impl FrontendConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("FRONTEND_BASE_URL", "http://localhost:5173"),
            reset_password_path: env_or("FRONTEND_RESET_PASSWORD_PATH", "/reset-password"),
        }
    }

    /// `{base_url}{reset_password_path}?token={token}`
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}{}?token={}",
            self.base_url.trim_end_matches('/'),
            self.reset_password_path,
            urlencoding::encode(token)
        )
    }
}

/// Access Filter가 토큰 검사 없이 통과시키는 경로 목록
#[derive(Debug, Clone)]
pub struct PublicRoutes {
    prefixes: Vec<String>,
}

impl PublicRoutes {
    pub const DEFAULT_PREFIXES: &'static str =
        "/auth/,/health,/swagger-ui/,/v3/api-docs/,/swagger-ui.html";

    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(split_list(&env_or("PUBLIC_ROUTE_PREFIXES", Self::DEFAULT_PREFIXES)))
    }

    /// 경로가 접두사로 시작하거나, 끝의 `/`를 뗀 접두사와 정확히 같으면 공개 경로입니다.
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path.starts_with(prefix.as_str()) || path == prefix.trim_end_matches('/')
        })
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::new(split_list(Self::DEFAULT_PREFIXES))
    }
}

/// SMTP 메일 발송 설정
///
/// `MAIL_ENABLED=false`(기본값)이면 발송 대신 로그만 남깁니다.
/// 프로덕션에서는 메일이 꺼져 있거나 `SMTP_HOST`가 없으면 시작하지 않습니다.
#[derive(Clone)]
pub struct MailConfig {
    pub enabled: bool,
    pub from: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
}

impl MailConfig {
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        let config = Self {
            enabled: env_parse_or("MAIL_ENABLED", false),
            from: env_or("MAIL_FROM", "no-reply@localhost"),
            smtp_host: env_or("SMTP_HOST", ""),
            smtp_port: env_parse_or("SMTP_PORT", 587),
            username: env_or("SMTP_USERNAME", ""),
            password: env_or("SMTP_PASSWORD", ""),
        };

        config.ensure_deliverable(environment)?;
        Ok(config)
    }

    /// 재설정 메일이 실제로 나갈 수 있는 설정인지 확인합니다.
    pub fn ensure_deliverable(&self, environment: &Environment) -> AppResult<()> {
        if self.enabled && self.smtp_host.trim().is_empty() {
            return Err(AppError::InternalError(
                "SMTP_HOST must be set when MAIL_ENABLED=true".to_string(),
            ));
        }

        if !self.enabled {
            if environment.is_production() {
                return Err(AppError::InternalError(
                    "MAIL_ENABLED must be true in production".to_string(),
                ));
            }
            log::warn!("MAIL_ENABLED=false, password reset emails will only be logged");
        }

        Ok(())
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("enabled", &self.enabled)
            .field("from", &self.from)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
