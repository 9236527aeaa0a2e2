//! 사용자 관리 서비스 구현
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//! 등록 시 비밀번호 해싱, 로그인 자격 증명 검증, 목록/조회/수정/삭제와
//! 마지막 관리자 보호 규칙을 구현합니다.

use std::sync::Arc;

use mongodb::bson::{doc, DateTime};

use crate::domain::dto::users::request::{
    UpdateUserDetails, UserRegistration, UserRegistrationAdmin,
};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::password::{hash_password, verify_password};

/// 사용자 관리 서비스
///
/// 리포지토리를 명시적으로 주입받으며, 핸들러 계층과 데이터 액세스
/// 계층 사이의 비즈니스 규칙을 담당합니다.
pub struct UserService {
    repo: Arc<UserRepository>,
}

impl UserService {
    /// 주어진 리포지토리로 서비스를 생성합니다.
    pub fn new(repo: Arc<UserRepository>) -> Self {
        Self { repo }
    }

    /// 기본 `user` 역할로 신규 사용자를 등록합니다.
    ///
    /// 비밀번호는 bcrypt로 해싱되어 저장되며 평문은 보존되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 또는 사용자명 중복
    pub async fn register(&self, request: UserRegistration) -> AppResult<User> {
        let digest = hash_password(&request.password)?;
        let user = User::new(request.email, request.username, digest);

        let created = self.repo.insert(user).await?;
        log::info!("신규 사용자 등록 완료: {}", created.username);

        Ok(created)
    }

    /// 역할 목록을 지정하여 신규 사용자를 등록합니다.
    ///
    /// 관리자 전용 등록 경로에서 사용됩니다. 호출 전에 관리자 권한
    /// 검증이 끝나 있어야 합니다.
    pub async fn register_with_roles(&self, request: UserRegistrationAdmin) -> AppResult<User> {
        let digest = hash_password(&request.password)?;
        let user = User::with_roles(request.email, request.username, digest, request.roles);

        let created = self.repo.insert(user).await?;
        log::info!(
            "신규 사용자 등록 완료: {} (역할: {:?})",
            created.username,
            created.roles
        );

        Ok(created)
    }

    /// 로그인 자격 증명을 검증합니다.
    ///
    /// 사용자 존재 여부와 비밀번호 불일치를 구분하지 않고 동일한
    /// 메시지로 응답하여 계정 열거를 방지합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자 없음 또는 비밀번호 불일치
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.repo.find_by_username(username).await?.ok_or_else(|| {
            AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string())
        })?;

        if !verify_password(password, &user.password) {
            log::warn!("로그인 실패: {}", username);
            return Err(AppError::AuthenticationError(
                "사용자명 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// 전체 사용자 목록 조회 (사용자명 오름차순)
    pub async fn list(&self, limit: Option<i64>, skip: Option<u64>) -> AppResult<Vec<User>> {
        self.repo.find_all(limit, skip).await
    }

    /// 전체 사용자 수
    pub async fn count(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    /// 사용자명으로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자명의 사용자가 없음
    pub async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username)))
    }

    /// 사용자 정보 수정
    ///
    /// 이메일/사용자명/역할을 갱신하고 `last_update`를 현재 시각으로
    /// 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 수정 대상 사용자가 없음
    /// * `AppError::ConflictError` - 변경된 이메일/사용자명이 이미 사용 중
    pub async fn update_by_username(
        &self,
        username: &str,
        update: UpdateUserDetails,
    ) -> AppResult<User> {
        let roles = mongodb::bson::to_bson(&update.roles)
            .map_err(|e| AppError::InternalError(format!("역할 직렬화 실패: {}", e)))?;

        let update_doc = doc! {
            "email": &update.email,
            "username": &update.username,
            "roles": roles,
            "last_update": DateTime::now(),
        };

        let updated = self
            .repo
            .update_by_username(username, update_doc)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username))
            })?;

        log::info!("사용자 수정 완료: {} -> {}", username, updated.username);
        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// 삭제 대상이 마지막 남은 관리자라면 거부합니다. 관리자가 한 명도
    /// 없는 시스템은 복구할 수 없기 때문입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 삭제 대상 사용자가 없음
    /// * `AppError::NotAcceptable` - 마지막 관리자 삭제 시도
    pub async fn delete_by_username(&self, username: &str) -> AppResult<()> {
        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", username))
            })?;

        if user.is_admin() && self.repo.count_admins().await? == 1 {
            return Err(AppError::NotAcceptable(
                "마지막 관리자 계정은 삭제할 수 없습니다".to_string(),
            ));
        }

        self.repo.delete_by_username(username).await?;
        log::info!("사용자 삭제 완료: {}", username);

        Ok(())
    }
}
