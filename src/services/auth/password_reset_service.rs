//! 비밀번호 재설정 서비스
//!
//! ## 비밀번호 찾기
//!
//! 활성 사용자가 없으면 아무것도 하지 않고 성공으로 끝냅니다 (계정 존재 여부 비노출).
//! 있으면 원장에 토큰을 만들고 재설정 링크 메일을 보냅니다. 메일 발송 실패는 그대로 전파됩니다.
//!
//! ## 비밀번호 재설정
//!
//! 검사 순서는 고정입니다.
//!
//! 1. 식별자 형식 (UUID) → [`AuthError::InvalidToken`]
//! 2. 원장 조회 → [`AuthError::InvalidToken`]
//! 3. 이미 사용됨 → [`AuthError::TokenAlreadyUsed`] (만료 여부와 무관)
//! 4. `now >= expires_at` → [`AuthError::TokenExpired`]
//! 5. 소유 사용자가 없거나 삭제됨 → [`AuthError::InvalidToken`]
//! 6. 새 비밀번호 정책 → [`AppError::ValidationError`]
//!
//! 통과하면 새 비밀번호 해시를 먼저 저장하고, 그 다음 토큰을 원자적으로 소비합니다.
//! 두 단계 사이에서 중단되면 토큰이 재사용 가능한 상태로 남을 뿐, "사용됨" 토큰에
//! 비밀번호가 그대로인 상태는 생기지 않습니다.
//!
//! 해시 저장은 조회 시점의 해시가 그대로일 때만 성공합니다. 같은 토큰으로 동시에 들어온
//! 요청 중 소비에 진 쪽은 자신이 쓴 해시를 되돌리고 [`AuthError::TokenAlreadyUsed`]를 받습니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::clock::Clock;
use crate::core::errors::{AppError, AppResult, AuthError};
use crate::domain::dto::users::request::create_user_request::validate_password_policy;
use crate::repositories::users::UserRepository;
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::reset_token_ledger::ResetTokenLedger;
use crate::services::email::{EmailSender, PasswordResetEmailComposer};
use crate::utils::string_utils::{mask_email, normalize_email};

pub struct PasswordResetService {
    users: Arc<dyn UserRepository>,
    ledger: Arc<ResetTokenLedger>,
    hasher: PasswordHasher,
    email_sender: Arc<dyn EmailSender>,
    composer: PasswordResetEmailComposer,
    clock: Arc<dyn Clock>,
}

impl PasswordResetService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        ledger: Arc<ResetTokenLedger>,
        hasher: PasswordHasher,
        email_sender: Arc<dyn EmailSender>,
        composer: PasswordResetEmailComposer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            ledger,
            hasher,
            email_sender,
            composer,
            clock,
        }
    }

    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_active_by_email(&email).await? else {
            log::debug!("비밀번호 찾기: 활성 사용자 없음 ({})", mask_email(&email));
            return Ok(());
        };

        let entry = self.ledger.create(&user).await?;
        log::info!("비밀번호 재설정 토큰 발급: {}", mask_email(&user.email));

        let message = self.composer.compose(&user.email, &entry.token);
        self.email_sender.send(message).await
    }

    pub async fn reset_password(&self, raw_token: &str, new_password: &str) -> AppResult<()> {
        let token_id = Uuid::parse_str(raw_token.trim()).map_err(|_| AuthError::InvalidToken)?;

        let entry = self
            .ledger
            .find_by_identifier(&token_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if entry.is_used() {
            return Err(AuthError::TokenAlreadyUsed.into());
        }

        let now = self.clock.now_bson();
        if entry.is_expired(now) {
            return Err(AuthError::TokenExpired.into());
        }

        let user = self
            .users
            .find_by_id(&entry.user_id)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or_else(|| {
                log::warn!("재설정 토큰의 소유자가 없거나 삭제됨: {}", entry.user_id);
                AuthError::InvalidToken
            })?;

        validate_password_policy(new_password).map_err(|e| {
            let reason = e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
            AppError::ValidationError(format!("new_password: {}", reason))
        })?;

        let password_hash = self.hasher.hash(new_password)?;
        if !self
            .users
            .update_password_hash(&entry.user_id, &user.password_hash, &password_hash, now)
            .await?
        {
            // 같은 토큰으로 먼저 들어온 요청이 이미 비밀번호를 바꿈
            log::warn!("재설정 중 비밀번호가 먼저 변경됨: {}", mask_email(&user.email));
            return Err(AuthError::TokenAlreadyUsed.into());
        }

        if !self.ledger.consume_if_unused(&token_id).await? {
            log::warn!("재설정 토큰 동시 사용 감지: {}", mask_email(&user.email));
            // 소비에 진 쪽은 자신이 쓴 해시를 되돌림
            let restored = self
                .users
                .update_password_hash(&entry.user_id, &password_hash, &user.password_hash, now)
                .await?;
            if !restored {
                log::warn!("비밀번호 복원 생략 (이미 다른 값으로 변경됨): {}", mask_email(&user.email));
            }
            return Err(AuthError::TokenAlreadyUsed.into());
        }

        log::info!("비밀번호 재설정 완료: {}", mask_email(&user.email));
        Ok(())
    }
}
