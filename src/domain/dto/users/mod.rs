//! # User Data Transfer Objects Module
//!
//! 인증 API의 요청/응답 데이터 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── auth_request.rs         # 로그인, 비밀번호 찾기/재설정
//! │   └── create_user_request.rs  # 회원가입 + 비밀번호 정책
//! └── response/
//!     └── user_response.rs        # 회원가입/로그인/메시지/현재 사용자 응답
//! ```
//!
//! ## JSON 예제
//!
//! ```json
//! // POST /auth/register
//! { "email": "user@example.com", "password": "Secret1!", "firstName": "Ada", "lastName": "Lovelace" }
//! // 201 Created
//! { "email": "user@example.com" }
//!
//! // POST /auth/login → 200 OK
//! { "token": "eyJhbGciOiJIUzI1NiIs..." }
//!
//! // POST /auth/reset-password
//! { "token": "3f1c2e9a-8b7d-4c6e-9f0a-1b2c3d4e5f60", "newPassword": "NewPass123!" }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
