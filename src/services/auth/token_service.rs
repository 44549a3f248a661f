//! JWT 토큰 코덱
//!
//! HS256으로 서명한 자기 완결형 액세스 토큰을 발급하고 해석합니다.
//! 서버 쪽 세션 테이블은 없으며, 토큰의 유효성은 사용 시점에 자격 증명 저장소와
//! 함께 다시 판단합니다 (Access Filter 참고).
//!
//! 서명 키는 생성 시점에 주입되며 전역 상태를 두지 않습니다.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::clock::Clock;
use crate::core::errors::{AppError, AuthError};
use crate::domain::models::auth::role::Role;
use crate::domain::models::token::TokenClaims;

const BEARER_PREFIX: &str = "Bearer ";

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료 판정은 주입된 시계로 `is_valid`에서 수행
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiration: config.expiration,
            clock,
        }
    }

    /// `iat = now`, `exp = now + TTL`인 서명 토큰을 발급합니다.
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, AppError> {
        let now = self.clock.now();
        let claims = TokenClaims::new(subject, role, now, now + self.expiration);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 구조만 검증합니다. 만료 여부는 보지 않습니다.
    ///
    /// 형식 오류, 서명 불일치, 클레임 해석 실패, `exp <= iat`는 모두 [`AuthError::InvalidToken`].
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 해석 실패: {:?}", e.kind());
                AuthError::InvalidToken
            })?;

        if claims.exp <= claims.iat {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    /// 해석 실패, 주체 불일치, `now >= exp`이면 `false`. 에러를 돌려주지 않습니다.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => {
                claims.subject() == expected_subject && !claims.is_expired_at(self.clock.now())
            }
            Err(_) => false,
        }
    }

    /// `Authorization` 헤더에서 `Bearer ` 스킴의 토큰 부분만 꺼냅니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header.strip_prefix(BEARER_PREFIX)
    }
}
