//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 자격 증명 검증, 프로필 조회/수정/삭제 등
//! 사용자 생명주기와 관련된 비즈니스 로직을 제공합니다.

pub mod user_service;

pub use user_service::UserService;
