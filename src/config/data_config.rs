//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다. 미설정 시 개발 환경.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_name(&value))
            .unwrap_or(Environment::Development)
    }

    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`가 4..=15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost(env: &Environment) -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
                log::warn!("BCRYPT_COST {} out of range (4..=15), falling back to default", cost);
            }
        }

        Self::bcrypt_cost_for_env(env)
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_parse_or("PORT", 8080)
    }

    pub fn host() -> String {
        env_or("HOST", "0.0.0.0")
    }

    /// CORS 허용 Origin 목록 (쉼표 구분)
    pub fn cors_allowed_origins() -> Vec<String> {
        split_list(&env_or("CORS_ALLOWED_ORIGINS", "http://localhost:5173"))
    }
}

/// 사용자/재설정 토큰 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    pub fn current() -> Self {
        env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(StorageBackend::MongoDb)
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            database_name: env_or("DATABASE_NAME", "taskboard"),
        }
    }
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
