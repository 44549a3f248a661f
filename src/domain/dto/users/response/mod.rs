//! # 사용자/인증 응답 DTO 모듈
//!
//! 비밀번호 해시 같은 민감한 정보는 응답에 포함하지 않습니다.

pub mod user_response;

pub use user_response::{CurrentUserResponse, LoginResponse, MessageResponse, UserResponse};
