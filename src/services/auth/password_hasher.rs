//! bcrypt 비밀번호 해셔

use std::time::Instant;

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }

    /// 해시 형식이 깨져 있어도 에러 대신 `false`를 돌려줍니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(password, password_hash).unwrap_or_else(|e| {
            log::warn!("비밀번호 검증 실패: {}", e);
            false
        });
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("Secret1!").unwrap();

        assert_ne!(hash, "Secret1!");
        assert!(hasher.verify("Secret1!", &hash));
        assert!(!hasher.verify("Secret2!", &hash));
    }

    #[test]
    fn test_verify_with_malformed_hash_fails_closed() {
        let hasher = PasswordHasher::new(4);

        assert!(!hasher.verify("Secret1!", "not-a-bcrypt-hash"));
    }
}
