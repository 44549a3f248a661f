//! # Repository Layer
//!
//! 저장소 계약(트레이트)과 구현체입니다.
//!
//! | 계약 | MongoDB | 메모리 |
//! |------|---------|--------|
//! | [`UserRepository`] | [`MongoUserRepository`] | [`InMemoryUserRepository`] |
//! | [`ResetTokenRepository`] | [`MongoResetTokenRepository`] | [`InMemoryResetTokenRepository`] |

pub mod memory;
pub mod reset_tokens;
pub mod users;

pub use memory::{InMemoryResetTokenRepository, InMemoryUserRepository};
pub use reset_tokens::{MongoResetTokenRepository, ResetTokenRepository};
pub use users::{MongoUserRepository, UserRepository};
