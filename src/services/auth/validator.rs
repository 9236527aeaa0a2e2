//! 토큰 클레임 검증 규칙
//!
//! 디코딩된 클레임에 대한 의미 규칙을 적용합니다. 형태 검사와
//! 액세스/리프레시 토큰 종류 판별로 구성되며, 서명/만료 검증은
//! 이 모듈이 아닌 토큰 코덱의 책임입니다.

use serde_json::Value;

use crate::domain::models::token::TokenClaims;

/// 토큰 페이로드에 요구되는 클레임 키 목록
const REQUIRED_CLAIMS: [&str; 5] = ["email", "username", "roles", "exp", "is_refresh"];

/// 페이로드에 필요한 클레임 키가 모두 존재하는지 확인합니다.
///
/// 키의 존재만 검사하고 값의 내용은 검사하지 않습니다. 빈 문자열
/// 값도 "존재"로 취급되므로 모든 필드가 빈 클레임 집합도 형태상
/// 유효합니다. 알 수 없는 추가 키는 무시됩니다.
pub fn has_token_shape(payload: &Value) -> bool {
    match payload.as_object() {
        Some(map) => REQUIRED_CLAIMS.iter().all(|key| map.contains_key(*key)),
        None => false,
    }
}

/// 클레임이 액세스 토큰으로 유효한지 확인합니다.
///
/// 리프레시 토큰은 서명과 만료가 유효하더라도 액세스 토큰 자리에서
/// 절대 통과하지 못합니다. 장기 자격 증명이 단기 연산을 인가하는
/// 오용을 막는 핵심 불변식입니다.
pub fn valid_access(claims: &TokenClaims) -> bool {
    !claims.is_refresh
}

/// 클레임이 리프레시 토큰으로 유효한지 확인합니다.
pub fn valid_refresh(claims: &TokenClaims) -> bool {
    claims.is_refresh
}
