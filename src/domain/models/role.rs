//! 사용자 역할 모델
//!
//! 시스템이 인정하는 역할을 닫힌 열거형으로 정의하고,
//! 역할 집합에 대한 권한 판정 규칙을 제공합니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 느슨한 문자열 식별자 대신 닫힌 열거형을 사용합니다.
/// 오타로 인해 어떤 요청도 통과시키지 못하는 유령 역할이
/// 생기는 것을 컴파일 타임에 차단합니다.
///
/// ## 직렬화
///
/// 데이터베이스 문서와 JWT 페이로드에는 소문자 문자열
/// (`"user"`, `"admin"`)로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 문자열에서 Role을 생성합니다 (대소문자 무관).
    ///
    /// # Errors
    ///
    /// 지원하지 않는 역할 이름인 경우 에러 메시지를 반환합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    /// Role을 저장 형식과 동일한 소문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 보유 역할이 요구 역할 집합을 만족하는지 판정합니다.
///
/// 요구 집합이 보유 집합의 부분집합일 때만 true 입니다.
/// 즉 요구 역할을 **모두** 보유해야 하며(ANY 가 아닌 ALL 조건),
/// 빈 요구 집합은 항상 만족됩니다.
pub fn has_required_roles(held: &[Role], required: &[Role]) -> bool {
    required.iter().all(|role| held.contains(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_string() {
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);

        // 대소문자 무관 테스트
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("User").unwrap(), Role::User);

        // 지원하지 않는 역할 테스트
        assert!(Role::from_str("moderator").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_roundtrip() {
        for role_str in ["user", "admin"] {
            let role = Role::from_str(role_str).unwrap();
            assert_eq!(role.as_str(), role_str);
        }
    }

    #[test]
    fn test_role_serialization() {
        // JSON 표현은 저장 형식과 동일한 소문자 문자열
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");

        let deserialized: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(deserialized, Role::User);
    }

    #[test]
    fn test_required_roles_subset_law() {
        let held = vec![Role::User, Role::Admin];

        assert!(has_required_roles(&held, &[Role::Admin]));
        assert!(has_required_roles(&held, &[Role::User, Role::Admin]));
        assert!(!has_required_roles(&[Role::User], &[Role::Admin]));

        // ALL 조건: 하나라도 빠지면 불만족
        assert!(!has_required_roles(&[Role::Admin], &[Role::User, Role::Admin]));
    }

    #[test]
    fn test_required_roles_empty_sets() {
        // 빈 요구 집합은 항상 만족
        assert!(has_required_roles(&[Role::User], &[]));
        assert!(has_required_roles(&[], &[]));

        // 빈 보유 집합은 비어 있지 않은 요구를 만족할 수 없음
        assert!(!has_required_roles(&[], &[Role::Admin]));
    }
}
