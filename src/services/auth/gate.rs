//! 토큰 기반 인증/인가 게이트
//!
//! 제시된 베어러 토큰 하나에 대해 인증 여부와 역할 충족 여부를
//! 판정합니다. 판정은 토큰과 불변 서명 설정만의 순수 함수이며,
//! 저장소 조회나 기타 부수 효과가 없습니다.

use crate::domain::models::auth::AuthOutcome;
use crate::domain::models::role::{has_required_roles, Role};
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult, TokenError};
use crate::services::auth::token_service::TokenService;
use crate::services::auth::validator;

/// 인증/인가 게이트
///
/// 토큰 코덱을 명시적으로 주입받는 불변 컴포넌트입니다.
/// 공유 가변 상태가 없어 동시 호출에 조율 없이 안전합니다.
#[derive(Clone)]
pub struct AuthGate {
    tokens: TokenService,
}

impl AuthGate {
    /// 주어진 토큰 서비스로 게이트를 생성합니다.
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }

    /// 액세스 토큰으로 요청을 인증합니다.
    ///
    /// 디코딩(서명/만료/형태)에 실패하면 해당 사유로 거부하고,
    /// 리프레시 토큰이 제시된 경우에도 거부합니다. 요청을 인가할 수
    /// 있는 것은 액세스 토큰뿐입니다.
    pub fn authorize(&self, token: &str) -> AuthOutcome {
        let claims = match self.tokens.decode(token) {
            Ok(claims) => claims,
            Err(reason) => return AuthOutcome::Rejected { reason },
        };

        if !validator::valid_access(&claims) {
            return AuthOutcome::Rejected {
                reason: TokenError::WrongTokenClass,
            };
        }

        AuthOutcome::Authenticated(claims)
    }

    /// 인증 후 관리자 역할 보유 여부까지 판정합니다.
    ///
    /// 인증에 실패하면 그대로 거부를 반환하고, 성공하면 역할 정책
    /// (요구 역할의 부분집합 충족)에 따라 `Authenticated` 또는
    /// `AuthenticatedPrivileged`로 구분합니다.
    pub fn authorize_admin(&self, token: &str) -> AuthOutcome {
        match self.authorize(token) {
            AuthOutcome::Authenticated(claims) => {
                if has_required_roles(&claims.roles, &[Role::Admin]) {
                    AuthOutcome::AuthenticatedPrivileged(claims)
                } else {
                    AuthOutcome::Authenticated(claims)
                }
            }
            other => other,
        }
    }

    /// 관리자 권한을 요구하는 가드
    ///
    /// 보호된 연산 진입부에서 가드 절로 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` (401) - 토큰이 거부됨
    /// * `AppError::AuthorizationError` (403) - 인증되었지만 관리자 아님
    pub fn require_admin(&self, token: &str) -> AppResult<TokenClaims> {
        match self.authorize_admin(token) {
            AuthOutcome::AuthenticatedPrivileged(claims) => Ok(claims),
            AuthOutcome::Authenticated(_) => Err(AppError::AuthorizationError(
                "관리자 권한이 필요합니다".to_string(),
            )),
            AuthOutcome::Rejected { reason } => Err(AppError::from(reason)),
        }
    }
}
