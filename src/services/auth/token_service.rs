//! JWT 토큰 코덱 구현
//!
//! 클레임의 서명/직렬화(발급)와 검증/역직렬화(디코딩)를 담당합니다.
//! 서명과 만료 검증은 클레임이 호출자에게 노출되기 전에 원자적으로
//! 수행됩니다. 검증되지 않은 페이로드를 부분적으로 신뢰하는 경로는
//! 존재하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::config::auth_config::{
    JwtSettings, ACCESS_TOKEN_TTL_MINUTES, REFRESH_TOKEN_TTL_DAYS,
};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult, TokenError};
use crate::services::auth::validator;

/// JWT 토큰 코덱 서비스
///
/// 서명 설정([`JwtSettings`])을 값으로 보유하는 불변 컴포넌트입니다.
/// 공유 가변 상태가 없으므로 복제하여 어디서든 동시에 사용할 수 있습니다.
#[derive(Clone)]
pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    /// 주어진 서명 설정으로 토큰 서비스를 생성합니다.
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// 사용자를 위한 액세스 토큰 발급
    ///
    /// 만료 시간은 [`ACCESS_TOKEN_TTL_MINUTES`] 상수를 따릅니다.
    pub fn issue_access_token(&self, user: &User) -> AppResult<String> {
        self.issue(user, Duration::minutes(ACCESS_TOKEN_TTL_MINUTES), false)
    }

    /// 사용자를 위한 리프레시 토큰 발급
    ///
    /// 만료 시간은 [`REFRESH_TOKEN_TTL_DAYS`] 상수를 따릅니다.
    pub fn issue_refresh_token(&self, user: &User) -> AppResult<String> {
        self.issue(user, Duration::days(REFRESH_TOKEN_TTL_DAYS), true)
    }

    /// 임의의 유효 시간으로 토큰을 발급합니다.
    ///
    /// 만료 시간은 발급 시각 + `ttl`로 계산됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 직렬화 또는 서명 실패
    pub fn issue(&self, user: &User, ttl: Duration, is_refresh: bool) -> AppResult<String> {
        let expiration = Utc::now() + ttl;

        let claims = TokenClaims {
            email: user.email.clone(),
            username: user.username.clone(),
            roles: user.roles.clone(),
            exp: expiration.timestamp(),
            is_refresh,
        };

        let header = Header::new(self.settings.algorithm);
        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료를 먼저 검증한 뒤, 페이로드 형태를 확인하고
    /// 타입이 있는 클레임으로 변환합니다. 알 수 없는 추가 필드는
    /// 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - 서명이 설정된 키로 검증되지 않음
    /// * `TokenError::Expired` - 서명은 유효하지만 만료 시간이 지남
    /// * `TokenError::Malformed` - 그 외 파싱/형태/타입 오류
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_ref());
        let mut validation = Validation::new(self.settings.algorithm);
        // 만료 경계를 정확히 적용 (기본 60초 여유 제거)
        validation.leeway = 0;

        let data = decode::<Value>(token, &decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        if !validator::has_token_shape(&data.claims) {
            return Err(TokenError::Malformed);
        }

        serde_json::from_value(data.claims).map_err(|_| TokenError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::models::role::Role;

    const SECRET_KEY: &str = "secret-key";

    fn service() -> TokenService {
        TokenService::new(JwtSettings::with_secret(SECRET_KEY))
    }

    fn mario() -> User {
        User::new(
            "mario@email.com".to_string(),
            "mariorossi".to_string(),
            "secure-hashed-pwd".to_string(),
        )
    }

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let tokens = service();
        let token = tokens.issue(&mario(), Duration::minutes(5), false).unwrap();

        let claims = tokens.decode(&token).unwrap();
        assert_eq!(claims.email, "mario@email.com");
        assert_eq!(claims.username, "mariorossi");
        assert_eq!(claims.roles, vec![Role::User]);
        assert!(!claims.is_refresh);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_refresh_flag_survives_roundtrip() {
        let tokens = service();
        let token = tokens.issue(&mario(), Duration::minutes(5), true).unwrap();

        let claims = tokens.decode(&token).unwrap();
        assert!(claims.is_refresh);
    }

    #[test]
    fn test_decode_with_wrong_key_fails() {
        let token = service().issue(&mario(), Duration::minutes(5), false).unwrap();

        let other = TokenService::new(JwtSettings::with_secret("another-key"));
        assert_eq!(other.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token_fails() {
        // 이미 만료된 토큰 발급 (ttl = -1분)
        let tokens = service();
        let token = tokens.issue(&mario(), Duration::minutes(-1), false).unwrap();

        assert_eq!(tokens.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_garbage_fails_as_malformed() {
        let tokens = service();

        assert_eq!(tokens.decode("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(tokens.decode(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_ignores_unknown_extra_claims() {
        // 전방 호환성: 디코더는 모르는 페이로드 필드를 무시한다
        let exp = (Utc::now() + Duration::minutes(5)).timestamp();
        let payload = json!({
            "email": "mario@email.com",
            "username": "mariorossi",
            "roles": ["user"],
            "exp": exp,
            "is_refresh": false,
            "issuer": "future-version",
            "session_id": 42,
        });

        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(SECRET_KEY.as_ref()),
        )
        .unwrap();

        let claims = service().decode(&token).unwrap();
        assert_eq!(claims.username, "mariorossi");
    }

    #[test]
    fn test_decode_rejects_incomplete_payload() {
        // username 클레임이 빠진 서명 유효 토큰
        let exp = (Utc::now() + Duration::minutes(5)).timestamp();
        let payload = json!({
            "email": "mario@email.com",
            "roles": ["user"],
            "exp": exp,
            "is_refresh": false,
        });

        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(SECRET_KEY.as_ref()),
        )
        .unwrap();

        assert_eq!(service().decode(&token), Err(TokenError::Malformed));
    }
}
