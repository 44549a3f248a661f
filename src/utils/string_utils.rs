//! # 문자열 유틸리티
//!
//! 이메일 정규화와 로그 출력용 마스킹 함수입니다.

/// 앞뒤 공백을 제거하고 소문자로 바꿉니다.
///
/// ```rust,ignore
/// assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 로그에 남길 때 로컬 파트의 첫 글자만 보이게 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
