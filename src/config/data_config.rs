//! 서버 및 실행 환경 설정 모듈
//!
//! 서버 바인딩 주소, 실행 환경 구분, 환경별 비밀번호 해싱 강도를
//! 담당합니다. JWT 서명 설정은 [`super::auth_config`]에 있습니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 구분하며, 알 수 없는 값은 안전한 쪽인
/// `Production`으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 자동화 테스트 환경
    Test,
    /// 프로덕션 유사 검증 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 감지합니다.
    /// 미설정 시 `Production`입니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT") {
            Ok(name) => Self::from_str(&name),
            Err(_) => Environment::Production,
        }
    }

    /// 환경 이름 문자열을 해석합니다 (대소문자 무관).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 강도 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 적용할 bcrypt cost를 결정합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4-15 범위로 설정되어 있으면 그 값을,
    /// 아니면 실행 환경별 기본값을 사용합니다. 범위를 벗어난 값은
    /// 무시됩니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(Environment::current()))
    }

    /// 실행 환경별 기본 bcrypt cost
    ///
    /// 개발/테스트에서는 속도를, 프로덕션에서는 무차별 대입 저항성을
    /// 우선합니다.
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 바인딩할 포트 (`PORT`, 기본값 8080)
    ///
    /// 숫자로 해석할 수 없는 값이면 기본값으로 대체합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_name_parsing() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("TESTING"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);

        // 알 수 없는 이름은 안전한 기본값으로
        assert_eq!(Environment::from_str("quantum"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_scales_with_environment() {
        let dev = PasswordConfig::bcrypt_cost_for_env(Environment::Development);
        let staging = PasswordConfig::bcrypt_cost_for_env(Environment::Staging);
        let prod = PasswordConfig::bcrypt_cost_for_env(Environment::Production);

        assert_eq!(dev, 4);
        assert!(dev < staging && staging < prod);
        assert_eq!(prod, 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
