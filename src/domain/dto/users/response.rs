//! 사용자 관련 응답 DTO
//!
//! 호출자의 권한에 따라 노출 범위가 다른 프로젝션들을 정의합니다.
//! 어떤 프로젝션에도 비밀번호 다이제스트는 포함되지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::config::ACCESS_TOKEN_TTL_MINUTES;
use crate::domain::entities::users::user::User;
use crate::domain::models::role::Role;

/// 단순 메시지 응답
#[derive(Debug, Serialize)]
pub struct BaseMessage {
    pub message: String,
}

impl BaseMessage {
    /// 성공을 알리는 기본 응답
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}

/// 일반 사용자에게 노출되는 부분 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPartialDetails {
    pub username: String,
    pub roles: Vec<Role>,
}

impl From<User> for UserPartialDetails {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            roles: user.roles,
        }
    }
}

/// 관리자에게 노출되는 상세 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPartialDetailsAdmin {
    pub email: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub creation: DateTime,
    pub last_update: DateTime,
}

impl From<User> for UserPartialDetailsAdmin {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            username: user.username,
            roles: user.roles,
            creation: user.creation,
            last_update: user.last_update,
        }
    }
}

/// 본인 조회용 전체 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserDetails {
    pub email: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub creation: DateTime,
    pub last_update: DateTime,
}

impl From<User> for CurrentUserDetails {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            username: user.username,
            roles: user.roles,
            creation: user.creation,
            last_update: user.last_update,
        }
    }
}

/// 토큰 쌍 응답 (토큰 갱신용)
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    /// Bearer 타입의 토큰 응답 생성
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: ACCESS_TOKEN_TTL_MINUTES * 60,
        }
    }
}

/// 로그인 응답 (사용자 정보 + JWT 토큰)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: CurrentUserDetails,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, access_token: String, refresh_token: String) -> Self {
        Self {
            user: CurrentUserDetails::from(user),
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: ACCESS_TOKEN_TTL_MINUTES * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "mario@email.com".to_string(),
            "mariorossi".to_string(),
            "digest".to_string(),
        )
    }

    #[test]
    fn test_partial_details_hide_email_and_password() {
        let details = UserPartialDetails::from(sample_user());
        let json = serde_json::to_value(&details).unwrap();

        assert!(json.get("email").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "mariorossi");
    }

    #[test]
    fn test_admin_details_expose_email_but_not_password() {
        let details = UserPartialDetailsAdmin::from(sample_user());
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["email"], "mario@email.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse::new(
            sample_user(),
            "access".to_string(),
            "refresh".to_string(),
        );

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, ACCESS_TOKEN_TTL_MINUTES * 60);
        assert_eq!(response.user.username, "mariorossi");
    }
}
