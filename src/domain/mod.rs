//! 도메인 계층 모듈
//!
//! 비즈니스 도메인을 구성하는 타입들을 계층별로 제공합니다.
//!
//! # 구성
//!
//! - [`entities`] - 데이터베이스 문서와 대응하는 영속 엔티티
//! - [`models`] - 역할, 토큰 클레임 등 값 중심의 도메인 모델
//! - [`dto`] - HTTP 경계의 요청/응답 구조체

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::users::request::{
    ListQuery, LoginRequest, RefreshTokenRequest, UpdateUserDetails, UserRegistration,
    UserRegistrationAdmin,
};
pub use dto::users::response::{
    BaseMessage, CurrentUserDetails, LoginResponse, TokenResponse, UserPartialDetails,
    UserPartialDetailsAdmin,
};
pub use entities::users::user::User;
pub use models::{has_required_roles, AuthOutcome, Role, TokenClaims};
