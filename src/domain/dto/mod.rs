//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 경계에서 사용되는 요청/응답 구조체를 정의합니다.
//! 엔티티를 직접 노출하는 대신 용도별 프로젝션을 사용합니다.

pub mod users;
