//! 회원가입 요청 DTO
//!
//! 새로운 로컬 계정 생성을 위한 요청 데이터와 비밀번호 정책 검증을 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 비밀번호 정책에서 허용하는 특수 문자
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 24, message = "비밀번호는 6-24자 사이여야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로는 입력할 수 없습니다".into()));
    }
    Ok(())
}

/// 길이(6-24자)와 [`validate_password_strength`]를 함께 검사합니다.
/// 재설정 흐름은 토큰 검사를 마친 뒤 이 함수로 새 비밀번호를 확인합니다.
pub(crate) fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if !(6..=24).contains(&length) {
        return Err(ValidationError::new("length")
            .with_message("비밀번호는 6-24자 사이여야 합니다".into()));
    }

    validate_password_strength(password)
}

/// 대문자, 소문자, 숫자, 특수 문자(`@$!%*?&`)를 하나 이상 포함하고
/// 그 외 문자는 쓰지 않아야 합니다.
pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c));
    if !allowed {
        return Err(ValidationError::new("invalid_password_chars")
            .with_message("비밀번호에 허용되지 않는 문자가 포함되어 있습니다".into()));
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_uppercase && has_lowercase && has_digit && has_special) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자, 특수문자를 포함해야 합니다".into()));
    }

    Ok(())
}
