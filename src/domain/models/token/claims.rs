//! JWT 인증 토큰 클레임 구조체
//!
//! 서명된 토큰의 페이로드를 표현합니다. 액세스 토큰과 리프레시 토큰은
//! 동일한 페이로드 형태를 공유하며 `is_refresh` 플래그로만 구분됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::role::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `email`: 사용자 이메일
/// - `username`: 사용자명
/// - `roles`: 사용자 역할 목록
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `is_refresh`: 리프레시 토큰 여부
///
/// 디코더는 알 수 없는 추가 필드를 무시하므로
/// 페이로드 확장에 대해 전방 호환됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 이메일
    pub email: String,
    /// 사용자명
    pub username: String,
    /// 사용자 역할 목록 (권한 기반 접근 제어용)
    pub roles: Vec<Role>,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 리프레시 토큰 여부 (false 이면 액세스 토큰)
    pub is_refresh: bool,
}

impl TokenClaims {
    /// 액세스 토큰 클레임인지 확인
    pub fn is_access(&self) -> bool {
        !self.is_refresh
    }
}
