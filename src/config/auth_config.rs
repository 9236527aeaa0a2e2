//! # Authentication Configuration Module
//!
//! JWT 토큰 서명에 관한 설정을 관리하는 모듈입니다.
//!
//! 전역 조회(service locator) 방식 대신, 프로세스 시작 시점에
//! [`JwtSettings`] 값을 한 번 구성하여 토큰 서비스에 명시적으로
//! 주입합니다. 구성 이후에는 불변이므로 동시 접근에 안전합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ALGORITHM="HS256"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtSettings;
//! use crate::services::auth::TokenService;
//!
//! let settings = JwtSettings::from_env();
//! let token_service = TokenService::new(settings);
//! ```

use std::env;

use jsonwebtoken::Algorithm;

/// 액세스 토큰 유효 시간 (분)
///
/// 액세스 토큰은 개별 API 호출을 인가하는 단기 자격 증명입니다.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// 리프레시 토큰 유효 시간 (일)
///
/// 리프레시 토큰은 새 액세스 토큰을 얻는 용도로만 쓰이는 장기 자격
/// 증명입니다.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// JWT 서명 설정
///
/// 서명 비밀키와 알고리즘을 담는 불변 설정 값입니다.
/// `main`에서 한 번 생성되어 토큰 서비스 생성자로 전달됩니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC 서명용 비밀키
    pub secret: String,
    /// 서명 알고리즘 (기본값: HS256)
    pub algorithm: Algorithm,
}

impl JwtSettings {
    /// 환경 변수에서 JWT 설정을 구성합니다.
    ///
    /// # Environment Variables
    ///
    /// * `JWT_SECRET` - 서명 비밀키. 미설정 시 개발용 기본값을 사용하며
    ///   경고 로그를 출력합니다.
    /// * `JWT_ALGORITHM` - 알고리즘 이름 (기본값: "HS256"). 알 수 없는
    ///   이름이면 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        let algorithm = match env::var("JWT_ALGORITHM") {
            Ok(name) => name.parse::<Algorithm>().unwrap_or_else(|_| {
                log::warn!("알 수 없는 JWT_ALGORITHM '{}', HS256 사용", name);
                Algorithm::HS256
            }),
            Err(_) => Algorithm::HS256,
        };

        Self { secret, algorithm }
    }

    /// 명시된 비밀키와 기본 알고리즘으로 설정을 생성합니다.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_secret_defaults_to_hs256() {
        let settings = JwtSettings::with_secret("secret-key");

        assert_eq!(settings.secret, "secret-key");
        assert_eq!(settings.algorithm, Algorithm::HS256);
    }

    #[test]
    fn test_refresh_ttl_outlives_access_ttl() {
        assert!(REFRESH_TOKEN_TTL_DAYS * 24 * 60 > ACCESS_TOKEN_TTL_MINUTES);
    }
}
