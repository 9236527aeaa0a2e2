//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며, 호출자의 권한에
//! 따라 노출되는 프로젝션이 달라집니다.
//!
//! ## 엔드포인트 구성
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/register` | 불필요 | 기본 `user` 역할로 등록 |
//! | `POST` | `/register-roles` | 관리자 | 역할을 지정하여 등록 |
//! | `GET` | `/all` | 필요 | 목록 조회 (권한별 프로젝션) |
//! | `GET` | `/count` | 필요 | 전체 사용자 수 |
//! | `GET` | `/me` | 필요 | 본인 정보 조회 |
//! | `GET` | `/username/{username}` | 필요 | 단건 조회 (권한별 프로젝션) |
//! | `PUT` | `/username/{username}` | 관리자 또는 본인 | 수정 |
//! | `DELETE` | `/username/{username}` | 관리자 또는 본인 | 삭제 |

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{
    ListQuery, UpdateUserDetails, UserRegistration, UserRegistrationAdmin,
};
use crate::domain::dto::users::response::{
    BaseMessage, CurrentUserDetails, UserPartialDetails, UserPartialDetailsAdmin,
};
use crate::errors::AppError;
use crate::handlers::bearer_token;
use crate::services::auth::AuthGate;
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// 공개 엔드포인트입니다. 등록된 사용자는 항상 기본 `user` 역할을
/// 부여받습니다. 역할을 지정하려면 관리자용 `/register-roles`를
/// 사용해야 합니다.
///
/// # Endpoint
/// `POST /users/register`
#[post("/register")]
pub async fn register(
    payload: web::Json<UserRegistration>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    log::info!("사용자 등록 요청: {}", request.username);

    users.register(request).await?;

    Ok(HttpResponse::Created().json(BaseMessage::ok()))
}

/// 역할 지정 사용자 등록 핸들러
///
/// 관리자 전용입니다. 등록할 사용자의 역할 목록을 직접 지정할 수
/// 있으며, 최소 한 개의 역할이 필요합니다.
///
/// # Endpoint
/// `POST /users/register-roles`
#[post("/register-roles")]
pub async fn register_roles(
    req: HttpRequest,
    payload: web::Json<UserRegistrationAdmin>,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    gate.require_admin(bearer_token(&req)?)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    log::info!(
        "관리자 사용자 등록 요청: {} (역할: {:?})",
        request.username,
        request.roles
    );

    users.register_with_roles(request).await?;

    Ok(HttpResponse::Created().json(BaseMessage::ok()))
}

/// 사용자 목록 조회 핸들러
///
/// 인증된 사용자라면 누구나 호출할 수 있습니다. 관리자는 이메일과
/// 시각이 포함된 상세 프로젝션을, 일반 사용자는 부분 프로젝션을
/// 받습니다. `limit`/`skip` 쿼리로 범위를 제한할 수 있습니다.
///
/// # Endpoint
/// `GET /users/all?limit={limit}&skip={skip}`
#[get("/all")]
pub async fn all_users(
    req: HttpRequest,
    query: web::Query<ListQuery>,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    let outcome = gate.authorize_admin(bearer_token(&req)?);
    let privileged = outcome.is_privileged();
    outcome.into_claims()?;

    let list = users.list(query.limit, query.skip).await?;

    if privileged {
        let details: Vec<UserPartialDetailsAdmin> =
            list.into_iter().map(Into::into).collect();
        Ok(HttpResponse::Ok().json(details))
    } else {
        let details: Vec<UserPartialDetails> = list.into_iter().map(Into::into).collect();
        Ok(HttpResponse::Ok().json(details))
    }
}

/// 사용자 수 조회 핸들러
///
/// # Endpoint
/// `GET /users/count`
#[get("/count")]
pub async fn count_users(
    req: HttpRequest,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    gate.authorize(bearer_token(&req)?).into_claims()?;

    let count = users.count().await?;

    Ok(HttpResponse::Ok().json(count))
}

/// 현재 사용자 조회 핸들러
///
/// 토큰의 사용자명으로 데이터베이스에서 최신 정보를 조회하여
/// 본인용 전체 프로젝션으로 반환합니다.
///
/// # Endpoint
/// `GET /users/me`
#[get("/me")]
pub async fn current_user(
    req: HttpRequest,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    let claims = gate.authorize(bearer_token(&req)?).into_claims()?;

    let user = users.find_by_username(&claims.username).await?;

    Ok(HttpResponse::Ok().json(CurrentUserDetails::from(user)))
}

/// 사용자 단건 조회 핸들러
///
/// 목록 조회와 동일하게 호출자의 권한에 따라 프로젝션이 달라집니다.
///
/// # Endpoint
/// `GET /users/username/{username}`
#[get("/username/{username}")]
pub async fn user_by_username(
    req: HttpRequest,
    path: web::Path<String>,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    let outcome = gate.authorize_admin(bearer_token(&req)?);
    let privileged = outcome.is_privileged();
    outcome.into_claims()?;

    let user = users.find_by_username(&path).await?;

    if privileged {
        Ok(HttpResponse::Ok().json(UserPartialDetailsAdmin::from(user)))
    } else {
        Ok(HttpResponse::Ok().json(UserPartialDetails::from(user)))
    }
}

/// 사용자 수정 핸들러
///
/// 관리자는 모든 사용자를, 일반 사용자는 본인(토큰의 사용자명과 경로가
/// 일치하는 경우)만 수정할 수 있습니다.
///
/// # Endpoint
/// `PUT /users/username/{username}`
#[put("/username/{username}")]
pub async fn update_user(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateUserDetails>,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();

    let outcome = gate.authorize_admin(bearer_token(&req)?);
    let privileged = outcome.is_privileged();
    let claims = outcome.into_claims()?;

    if !privileged && claims.username != username {
        log::warn!(
            "권한 없는 사용자 수정 시도: {} -> {}",
            claims.username,
            username
        );
        return Err(AppError::AuthorizationError(
            "다른 사용자를 수정할 권한이 없습니다".to_string(),
        ));
    }

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    users
        .update_by_username(&username, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(BaseMessage::ok()))
}

/// 사용자 삭제 핸들러
///
/// 관리자는 모든 사용자를, 일반 사용자는 본인만 삭제할 수 있습니다.
/// 마지막 남은 관리자는 삭제할 수 없습니다(406).
///
/// # Endpoint
/// `DELETE /users/username/{username}`
#[delete("/username/{username}")]
pub async fn delete_user(
    req: HttpRequest,
    path: web::Path<String>,
    users: web::Data<UserService>,
    gate: web::Data<AuthGate>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();

    let outcome = gate.authorize_admin(bearer_token(&req)?);
    let privileged = outcome.is_privileged();
    let claims = outcome.into_claims()?;

    if !privileged && claims.username != username {
        log::warn!(
            "권한 없는 사용자 삭제 시도: {} -> {}",
            claims.username,
            username
        );
        return Err(AppError::AuthorizationError(
            "다른 사용자를 삭제할 권한이 없습니다".to_string(),
        ));
    }

    users.delete_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(BaseMessage::ok()))
}
