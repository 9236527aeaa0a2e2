//! 사용자 서비스 메인 애플리케이션
//!
//! MongoDB 연결과 서명 설정을 준비한 뒤, 모든 서비스를 명시적으로
//! 조립하여 Actix-web HTTP 서버에 등록합니다.

use std::str::FromStr;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use user_service_backend::config::{JwtSettings, ServerConfig};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::UserRepository;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::auth::{AuthGate, TokenService};
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    // 데이터베이스 연결 및 유니크 인덱스 준비
    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));

    let user_repo = Arc::new(UserRepository::new(database.clone()));
    user_repo
        .create_indexes()
        .await
        .expect("users 컬렉션 인덱스 생성 실패");

    // 서명 설정을 한 번 구성하여 서비스들에 명시적으로 주입
    let jwt_settings = JwtSettings::from_env();
    let token_service = TokenService::new(jwt_settings);
    let auth_gate = AuthGate::new(token_service.clone());
    let user_service = UserService::new(user_repo);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, token_service, auth_gate).await
}

/// HTTP 서버를 구성하고 실행합니다.
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용하고
/// 초기화된 서비스들을 애플리케이션 데이터로 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: UserService,
    token_service: TokenService,
    auth_gate: AuthGate,
) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);
    info!("📍 API 엔드포인트: http://{}:{}/api/v1", host, port);

    // 초당 허용 요청 수 / 버스트 허용량
    let per_second: u64 = env_or("RATE_LIMIT_PER_SECOND", 100);
    let burst_size: u32 = env_or("RATE_LIMIT_BURST_SIZE", 200);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        per_second, burst_size
    );

    let users = web::Data::new(user_service);
    let tokens = web::Data::new(token_service);
    let gate = web::Data::new(auth_gate);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 명시적 의존성 주입
            .app_data(users.clone())
            .app_data(tokens.clone())
            .app_data(gate.clone())
            .configure(configure_all_routes)
    })
    .bind((host, port))?
    .workers(4)
    .run()
    .await
}

/// `PROFILE` 환경변수에 맞는 .env 파일을 로드합니다.
///
/// `PROFILE=prod`이면 `.env.prod`, `PROFILE=dev`(기본값)이면 `.env.dev`를
/// 읽고, 그 외 값이면 기본 `.env` 파일로 대체합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv::dotenv(),
    };

    match loaded {
        Ok(path) => info!("환경 설정 로드 됨 (profile={}): {}", profile, path.display()),
        Err(e) => error!("환경 설정 파일 로드 실패 (profile={}): {}", profile, e),
    }
}

/// RUST_LOG 기반 로깅 초기화 (기본: info, actix_web은 debug)
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 프론트엔드 통신을 위한 CORS 설정
///
/// 개발용 로컬호스트 Origin들을 허용합니다.
fn configure_cors() -> Cors {
    const DEV_ORIGINS: [&str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in DEV_ORIGINS {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// 환경변수를 숫자로 해석하고, 없거나 잘못된 값이면 기본값을 씁니다.
fn env_or<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("{} 값 '{}' 해석 실패. 기본값 {} 사용", name, value, default);
            default
        }),
        Err(_) => default,
    }
}
