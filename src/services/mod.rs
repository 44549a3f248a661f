//! # Service Layer
//!
//! - [`auth`] - 토큰 코덱, 로그인/회원가입, 비밀번호 재설정
//! - [`email`] - 메일 작성과 발송
//! - [`users`] - 사용자 조회

pub mod auth;
pub mod email;
pub mod users;
