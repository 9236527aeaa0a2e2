//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다. 사용자명은 시스템
//! 전체에서 유니크하므로 조회/수정/삭제의 기본 키로 사용합니다.
//!
//! 이메일과 사용자명의 고유성은 유니크 인덱스로 강제되며,
//! 위반 시 409 Conflict로 표면화됩니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::domain::models::role::Role;
use crate::errors::{AppError, AppResult};

/// 사용자 데이터 액세스 리포지토리
///
/// 데이터베이스 연결을 명시적으로 주입받으며, `users` 컬렉션에 대한
/// 모든 MongoDB 연산을 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    const COLLECTION_NAME: &'static str = "users";

    /// 주어진 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.database().collection(Self::COLLECTION_NAME)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 유니크하므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 또는 사용자명 유니크 인덱스 위반
    /// * `AppError::DatabaseError` - 그 외 데이터베이스 오류
    pub async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 전체 사용자 목록 조회 (사용자명 오름차순)
    ///
    /// `limit`/`skip`으로 반환 범위를 제한할 수 있습니다.
    pub async fn find_all(&self, limit: Option<i64>, skip: Option<u64>) -> AppResult<Vec<User>> {
        let mut find = self
            .collection()
            .find(doc! {})
            .sort(doc! { "username": 1 });

        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        if let Some(skip) = skip {
            find = find.skip(skip);
        }

        find.await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 사용자 문서 수
    pub async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 관리자 역할을 가진 사용자 수
    pub async fn count_admins(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! { "roles": Role::Admin.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자명으로 사용자 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하며, 업데이트된 최신 문서를
    /// 반환합니다. 해당 사용자가 없으면 `Ok(None)`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 변경된 이메일/사용자명이 이미 사용 중
    /// * `AppError::DatabaseError` - 그 외 데이터베이스 오류
    pub async fn update_by_username(
        &self,
        username: &str,
        update: Document,
    ) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "username": username }, doc! { "$set": update })
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    /// 사용자명으로 사용자 삭제
    ///
    /// 물리적 삭제이며 복구할 수 없습니다. 삭제된 문서가 있으면
    /// true를 반환합니다.
    pub async fn delete_by_username(&self, username: &str) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일과 사용자명의 유니크 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 쓰기 오류를 애플리케이션 오류로 변환합니다.
///
/// 유니크 인덱스 위반(코드 11000)은 409 Conflict로, 그 외는
/// 500 DatabaseError로 수렴합니다.
fn map_write_error(err: mongodb::error::Error) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000 => {
            AppError::ConflictError(format!(
                "이미 사용 중인 값이 있습니다: {}",
                write_error.message
            ))
        }
        ErrorKind::Command(command_error) if command_error.code == 11000 => {
            AppError::ConflictError(format!(
                "이미 사용 중인 값이 있습니다: {}",
                command_error.message
            ))
        }
        _ => AppError::DatabaseError(err.to_string()),
    }
}
