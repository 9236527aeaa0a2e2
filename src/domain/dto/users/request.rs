//! 사용자 관련 요청 DTO
//!
//! 클라이언트 입력 데이터의 역직렬화와 검증을 담당합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::models::role::Role;

/// 사용자 등록 요청
///
/// 공개 엔드포인트용 등록 요청입니다. 역할은 선택할 수 없으며
/// 항상 기본 `user` 역할이 부여됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRegistration {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 관리자용 사용자 등록 요청
///
/// 등록 시 역할 목록을 직접 지정할 수 있습니다. 최소 한 개의 역할이
/// 필요하며, 이 요청을 처리하는 엔드포인트는 관리자 권한을 요구합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRegistrationAdmin {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, message = "최소 한 개의 역할이 필요합니다"))]
    pub roles: Vec<Role>,
}

/// 사용자 수정 요청
///
/// 수정 가능한 필드만 포함합니다. 비밀번호 변경은 별도 흐름으로
/// 다루지 않으며 이 요청으로는 변경할 수 없습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserDetails {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 1, message = "최소 한 개의 역할이 필요합니다"))]
    pub roles: Vec<Role>,
}

/// 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 토큰 갱신 요청
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 목록 조회 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 반환할 최대 문서 수
    pub limit: Option<i64>,
    /// 건너뛸 문서 수
    pub skip: Option<u64>,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}
