//! 애플리케이션 전역 에러 타입 정의
//!
//! 모든 계층의 실패를 [`AppError`] 하나로 수렴시키고, `thiserror`로
//! 메시지를, `actix_web::ResponseError`로 HTTP 상태 매핑을 유도합니다.
//! 토큰 검증 실패는 원인 구분을 위해 별도의 [`TokenError`] 열거형으로
//! 표현되지만, HTTP 경계에서는 모두 401 Unauthorized 하나로 수렴합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn find_user(username: &str) -> AppResult<User> {
//!     user_repo.find_by_username(username).await?
//!         .ok_or_else(|| AppError::NotFound(format!("사용자 없음: {}", username)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 토큰 검증 실패 분류
///
/// 어떤 변형이든 서명이 검증되지 않은 토큰의 클레임은 신뢰하지 않습니다.
/// 변형 간 구분은 로깅과 테스트를 위한 것이며, 클라이언트 입장에서는
/// 네 경우 모두 "인증되지 않음"과 동일합니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// 토큰을 3부 구조로 파싱할 수 없거나 페이로드 형태가 올바르지 않음
    #[error("token is malformed")]
    Malformed,

    /// 서명이 설정된 비밀키/알고리즘으로 검증되지 않음
    #[error("token signature is invalid")]
    InvalidSignature,

    /// 서명은 유효하지만 만료 시간이 지남
    #[error("token is expired")]
    Expired,

    /// 디코딩은 성공했지만 요구되는 토큰 종류와 불일치
    /// (예: 액세스 토큰 자리에 리프레시 토큰 제시)
    #[error("token class does not match the requested operation")]
    WrongTokenClass,
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 인증 실패 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증은 되었으나 권한 부족 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 입력값 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 대상 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 수용할 수 없는 요청 (406 Not Acceptable)
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    /// 유니크 제약 위반 등 충돌 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 오류 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 그 외 내부 오류 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<TokenError> for AppError {
    /// 모든 토큰 검증 실패는 인증 실패(401)로 수렴합니다.
    fn from(err: TokenError) -> Self {
        AppError::AuthenticationError(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 상태 코드와 에러 메시지를 담은 JSON 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (
                AppError::AuthenticationError("bad token".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::AuthorizationError("admin only".into()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::ValidationError("email required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("no such user".into()), StatusCode::NOT_FOUND),
            (
                AppError::NotAcceptable("last admin".into()),
                StatusCode::NOT_ACCEPTABLE,
            ),
            (
                AppError::ConflictError("duplicate username".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::DatabaseError("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::InternalError("unexpected".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{:?}", error);
            assert_eq!(error.error_response().status(), expected);
        }
    }

    #[test]
    fn test_token_errors_collapse_to_unauthorized() {
        for token_error in [
            TokenError::Malformed,
            TokenError::InvalidSignature,
            TokenError::Expired,
            TokenError::WrongTokenClass,
        ] {
            let error = AppError::from(token_error);
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_error_message_includes_cause() {
        let error = AppError::ConflictError("username already taken".to_string());
        assert!(error.to_string().contains("username already taken"));
    }

    #[test]
    fn test_context_wraps_foreign_errors() {
        let result: Result<(), &str> = Err("socket closed");
        let wrapped = result.context("MongoDB 연결 확인 실패");

        match wrapped {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("MongoDB 연결 확인 실패"));
                assert!(msg.contains("socket closed"));
            }
            other => panic!("InternalError 가 아님: {:?}", other),
        }
    }
}
