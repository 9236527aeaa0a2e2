//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 단방향 해싱과 검증을 제공합니다.
//! 솔트는 해시마다 무작위로 생성되어 다이제스트에 포함되므로,
//! 동일한 평문도 호출마다 서로 다른 다이제스트를 만듭니다.

use bcrypt::{hash, verify};

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// 평문 비밀번호를 bcrypt 다이제스트로 해싱합니다.
///
/// cost는 실행 환경 설정([`PasswordConfig::bcrypt_cost`])을 따릅니다.
/// 다이제스트는 솔트를 포함하므로 동등 비교로는 일치 여부를 판단할 수
/// 없고, 반드시 [`verify_password`]를 사용해야 합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - bcrypt 해싱 실패
pub fn hash_password(plain: &str) -> AppResult<String> {
    hash(plain, PasswordConfig::bcrypt_cost())
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호가 다이제스트와 일치하는지 검증합니다.
///
/// 다이제스트에 포함된 솔트로 재계산하여 비교합니다.
/// 형식이 잘못된 다이제스트는 에러 대신 false를 반환합니다.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    verify(plain, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_PASSWORD: &str = "test-pwd";

    #[test]
    fn test_hash_differs_from_plaintext() {
        let digest = hash_password(PLAIN_PASSWORD).unwrap();
        assert_ne!(digest, PLAIN_PASSWORD);
    }

    #[test]
    fn test_verify_password() {
        let digest = hash_password(PLAIN_PASSWORD).unwrap();
        assert!(verify_password(PLAIN_PASSWORD, &digest));
    }

    #[test]
    fn test_verify_bad_password() {
        let digest = hash_password(PLAIN_PASSWORD).unwrap();
        assert!(!verify_password("bad-pwd", &digest));
    }

    #[test]
    fn test_salted_digests_are_unique() {
        // 솔트가 무작위이므로 같은 평문도 다이제스트가 달라야 한다
        let first = hash_password(PLAIN_PASSWORD).unwrap();
        let second = hash_password(PLAIN_PASSWORD).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_malformed_digest_returns_false() {
        assert!(!verify_password(PLAIN_PASSWORD, "not-a-bcrypt-digest"));
        assert!(!verify_password(PLAIN_PASSWORD, ""));
    }
}
