//! HTTP 요청 핸들러 모듈
//!
//! HTTP 경계에서 요청/응답 변환과 인증 가드 적용을 담당합니다.
//! 비즈니스 로직은 서비스 계층에, 인가 판정은 인증 게이트에 위임합니다.
//!
//! # 상태 코드 규약
//!
//! | 상황 | 상태 코드 |
//! |------|-----------|
//! | 성공 | 200 OK / 201 Created |
//! | 인증되지 않음 | 401 Unauthorized |
//! | 인증되었지만 권한 부족 | 403 Forbidden |
//! | 대상 없음 | 404 Not Found |
//! | 마지막 관리자 삭제 시도 | 406 Not Acceptable |
//! | 이메일/사용자명 중복 | 409 Conflict |
//! | 데이터베이스/알 수 없는 오류 | 500 Internal Server Error |

use actix_web::HttpRequest;

use crate::errors::{AppError, AppResult};

pub mod auth;
pub mod users;

/// Authorization 헤더에서 베어러 토큰을 추출합니다.
///
/// `Bearer {token}` 형식에서 토큰 부분만을 반환합니다.
///
/// # Errors
///
/// * `AppError::AuthenticationError` - 헤더가 없거나 형식이 잘못됨
pub(crate) fn bearer_token(req: &HttpRequest) -> AppResult<&str> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
    })
}
