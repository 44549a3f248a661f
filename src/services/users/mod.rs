//! 사용자 조회 서비스

pub mod user_service;

pub use user_service::UserService;
