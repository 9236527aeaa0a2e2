//! Authentication HTTP Handlers
//!
//! 로그인과 토큰 갱신 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest};
use crate::domain::dto::users::response::{LoginResponse, TokenResponse};
use crate::errors::{AppError, TokenError};
use crate::services::auth::validator::valid_refresh;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 로그인 핸들러
///
/// 사용자명과 비밀번호를 검증하고 액세스/리프레시 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = users
        .verify_credentials(&payload.username, &payload.password)
        .await?;

    let access_token = tokens.issue_access_token(&user)?;
    let refresh_token = tokens.issue_refresh_token(&user)?;

    log::info!("로그인 성공: {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse::new(user, access_token, refresh_token)))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍을 발급합니다. 액세스 토큰이
/// 제시되면 종류 불일치로 거부합니다. 역할 변경 등 발급 이후의 변동을
/// 반영하기 위해 사용자를 데이터베이스에서 다시 조회합니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    payload: web::Json<RefreshTokenRequest>,
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let claims = tokens.decode(&payload.refresh_token)?;

    if !valid_refresh(&claims) {
        return Err(TokenError::WrongTokenClass.into());
    }

    let user = users
        .find_by_username(&claims.username)
        .await
        .map_err(|_| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    let access_token = tokens.issue_access_token(&user)?;
    let refresh_token = tokens.issue_refresh_token(&user)?;

    log::info!("토큰 갱신 성공: {}", user.username);

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token, refresh_token)))
}
