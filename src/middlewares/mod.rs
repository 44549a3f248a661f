//! 미들웨어 모듈
//!
//! ### 접근 필터 (AccessFilter)
//! - Bearer 토큰 추출 및 해석
//! - 활성 사용자 확인 후 principal을 request extension에 저장
//! - 해석 실패 시 401로 파이프라인 중단
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(state.access_filter())
//!     .configure(|cfg| state.register(cfg))
//!     .configure(configure_all_routes)
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_inner::INVALID_TOKEN_MESSAGE;
pub use auth_middleware::AccessFilter;
