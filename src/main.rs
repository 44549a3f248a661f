//! 태스크보드 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! 설정에 따라 MongoDB 또는 메모리 저장소를 사용합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use taskboard_auth::config::{AppSettings, ServerConfig, StorageBackend};
use taskboard_auth::core::{AppState, SystemClock};
use taskboard_auth::db::Database;
use taskboard_auth::repositories::memory::{InMemoryResetTokenRepository, InMemoryUserRepository};
use taskboard_auth::repositories::reset_tokens::{MongoResetTokenRepository, ResetTokenRepository};
use taskboard_auth::repositories::users::{MongoUserRepository, UserRepository};
use taskboard_auth::routes::configure_all_routes;
use taskboard_auth::services::email::SmtpEmailSender;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 태스크보드 인증 서비스 시작중...");

    let settings = AppSettings::from_env().map_err(std::io::Error::other)?;
    info!("환경: {:?}, 저장소: {:?}", settings.environment, settings.storage);

    let (users, reset_tokens) = initialize_data_stores(&settings)
        .await
        .map_err(std::io::Error::other)?;

    let mailer = Arc::new(SmtpEmailSender::new(&settings.mail).map_err(std::io::Error::other)?);

    let state = AppState::new(&settings, users, reset_tokens, mailer, Arc::new(SystemClock));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 바깥쪽부터 Logger, NormalizePath, CORS, AccessFilter 순으로 적용됩니다.
/// CORS preflight는 AccessFilter에 도달하기 전에 응답됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        let state = state.clone();

        App::new()
            .wrap(state.access_filter())
            .wrap(configure_cors())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(|cfg| state.register(cfg))
            .configure(configure_all_routes)
    })
        .bind((host.as_str(), port))?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=debug`.
///
/// ```bash
/// RUST_LOG=taskboard_auth::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 백엔드로 사용자 저장소와 재설정 토큰 원장 저장소를 만듭니다
async fn initialize_data_stores(
    settings: &AppSettings,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn ResetTokenRepository>), taskboard_auth::core::AppError> {
    match settings.storage {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::connect(&settings.database).await?;

            let users = MongoUserRepository::new(&database);
            users.create_indexes().await?;

            let reset_tokens = MongoResetTokenRepository::new(&database);
            reset_tokens.create_indexes().await?;

            Ok((Arc::new(users), Arc::new(reset_tokens)))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용: 재시작하면 모든 데이터가 사라집니다");
            Ok((
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryResetTokenRepository::new()),
            ))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS` (쉼표 구분)에서 읽습니다.
fn configure_cors() -> Cors {
    let cors = ServerConfig::cors_allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
