//! 인증 요청관련 DTO
//!
//! 로그인, 비밀번호 찾기, 비밀번호 재설정 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

use crate::domain::dto::users::request::create_user_request::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 여기서는 빈 값만 거릅니다. 비밀번호 정책은 토큰 검사가 끝난 뒤
/// [`PasswordResetService`](crate::services::auth::PasswordResetService)가 확인합니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub token: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_password() {
        let req = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_reset_request_only_rejects_blank_fields() {
        let req: ResetPasswordRequest =
            serde_json::from_str(r#"{"token":"abc","newPassword":"NewPass123!"}"#).unwrap();
        assert!(req.validate().is_ok());

        // 정책 검사는 서비스에서 토큰 검사 이후에 수행
        let weak: ResetPasswordRequest =
            serde_json::from_str(r#"{"token":"abc","newPassword":"password"}"#).unwrap();
        assert!(weak.validate().is_ok());

        let blank: ResetPasswordRequest =
            serde_json::from_str(r#"{"token":"  ","newPassword":" "}"#).unwrap();
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("token"));
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_forgot_password_rejects_malformed_email() {
        let req = ForgotPasswordRequest {
            email: "not-an-email".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
