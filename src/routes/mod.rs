//! API 라우트 구성 모듈
//!
//! 엔드포인트를 기능 단위(`/users`, `/auth`)로 묶어 등록합니다.
//! 인증이 필요한 엔드포인트는 핸들러 내부에서 베어러 토큰을 검증하므로,
//! 여기서는 경로 구조만 선언합니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

/// 사용자 관리 라우트 (`/api/v1/users`)
///
/// - `POST /register` - 사용자 등록 (인증 불필요)
/// - `POST /register-roles` - 역할 지정 등록 (관리자)
/// - `GET /all`, `GET /count`, `GET /me` - 조회 (인증 필요)
/// - `GET|PUT|DELETE /username/{username}` - 단건 연산
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::register)
            .service(handlers::users::register_roles)
            .service(handlers::users::all_users)
            .service(handlers::users::count_users)
            .service(handlers::users::current_user)
            .service(handlers::users::user_by_username)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 인증 라우트 (`/api/v1/auth`)
///
/// 인증 자체를 위한 엔드포인트이므로 모두 Public 접근이 가능합니다.
///
/// - `POST /login` - 사용자명/비밀번호 로그인
/// - `POST /refresh` - 리프레시 토큰으로 토큰 쌍 재발급
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::refresh),
    );
}

/// 헬스체크 엔드포인트
///
/// 로드밸런서와 모니터링이 서비스 생존 여부를 확인하는 용도입니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
