//! 태스크보드 인증 서비스 백엔드
//!
//! 자체 회원가입/로그인, JWT 기반 상태 없는 요청 인증,
//! 그리고 메일 링크를 통한 비밀번호 재설정을 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: HS256 서명 액세스 토큰, 30분 유효
//! - **접근 필터**: 모든 요청의 Bearer 토큰을 확인해 principal을 붙이거나 401로 거절
//! - **비밀번호 재설정**: 1회용 UUID 토큰 (15분 유효), 원자적 소비
//! - **MongoDB**: 사용자와 재설정 토큰 영구 저장 (메모리 저장소로 대체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Access Filter  │ ← Bearer 토큰 → principal
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 코덱, 재설정 오케스트레이션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자, 재설정 토큰 원장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use taskboard_auth::config::AppSettings;
//! use taskboard_auth::core::AppState;
//!
//! let settings = AppSettings::from_env()?;
//! let state = AppState::new(&settings, users, reset_tokens, mailer, Arc::new(SystemClock));
//!
//! App::new()
//!     .wrap(state.access_filter())
//!     .configure(|cfg| state.register(cfg))
//!     .configure(configure_all_routes)
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
