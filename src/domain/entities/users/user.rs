//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션의 문서 형태와 일대일로 대응하는
//! 영속 엔티티를 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::role::Role;

/// 사용자 문서
///
/// 비밀번호는 bcrypt 다이제스트로만 저장되며 평문은 어디에도 남지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자명 (unique)
    pub username: String,
    /// bcrypt로 해시된 비밀번호
    pub password: String,
    /// 사용자 역할 목록
    pub roles: Vec<Role>,
    /// 생성 시간
    pub creation: DateTime,
    /// 마지막 수정 시간
    pub last_update: DateTime,
}

impl User {
    /// 기본 `user` 역할의 신규 사용자 생성
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self::with_roles(email, username, password_hash, vec![Role::User])
    }

    /// 역할 목록을 직접 지정하여 신규 사용자 생성
    ///
    /// 관리자 등록 경로에서 사용됩니다. 역할 목록 검증(최소 한 개)은
    /// 요청 DTO 계층에서 수행됩니다.
    pub fn with_roles(
        email: String,
        username: String,
        password_hash: String,
        roles: Vec<Role>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            password: password_hash,
            roles,
            creation: now,
            last_update: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 관리자 역할 보유 여부 확인
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = User::new(
            "mario@email.com".to_string(),
            "mariorossi".to_string(),
            "digest".to_string(),
        );

        assert_eq!(user.roles, vec![Role::User]);
        assert!(user.id.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_with_roles_keeps_given_roles() {
        let user = User::with_roles(
            "admin@email.com".to_string(),
            "admin".to_string(),
            "digest".to_string(),
            vec![Role::Admin, Role::User],
        );

        assert!(user.is_admin());
        assert_eq!(user.roles.len(), 2);
    }

    #[test]
    fn test_bson_roles_are_lowercase_strings() {
        let user = User::new(
            "mario@email.com".to_string(),
            "mariorossi".to_string(),
            "digest".to_string(),
        );

        let doc = mongodb::bson::to_document(&user).unwrap();
        let roles = doc.get_array("roles").unwrap();
        assert_eq!(roles[0].as_str(), Some("user"));
    }
}
