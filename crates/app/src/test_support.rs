//! Shared fixtures for use-case tests: in-memory backends wired exactly as
//! the composition root wires the real ones.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use diskus_auth::{AuthenticationTokenManager, JwtTokenManager};
use diskus_core::{DomainError, DomainResult, ThreadId, UserId};
use diskus_domain::{
    AuthenticationRepository, CommentRepository, IdGenerator, ThreadRepository, UserRepository,
};
use diskus_infra::{
    InMemoryAuthenticationRepository, InMemoryCommentRepository, InMemoryDatabase,
    InMemoryThreadRepository, InMemoryUserRepository, SequentialIdGenerator,
};

use crate::security::PasswordHash;
use crate::{AddThreadUseCase, AddUserUseCase};

/// Deterministic, reversible-looking hash so orchestration tests can assert
/// on stored values without touching a real KDF.
pub struct FakePasswordHash;

#[async_trait::async_trait]
impl PasswordHash for FakePasswordHash {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn compare_password(&self, plain: &str, hashed: &str) -> DomainResult<()> {
        if hashed == format!("hashed:{plain}") {
            Ok(())
        } else {
            Err(DomainError::authentication(
                "kredensial yang Anda masukkan salah",
            ))
        }
    }
}

pub struct Backend {
    pub user_repository: Arc<dyn UserRepository>,
    pub authentication_repository: Arc<dyn AuthenticationRepository>,
    pub thread_repository: Arc<dyn ThreadRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
    pub password_hash: Arc<dyn PasswordHash>,
}

pub fn backend() -> Backend {
    let db = InMemoryDatabase::new();
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIdGenerator::new());
    Backend {
        user_repository: Arc::new(InMemoryUserRepository::new(db.clone(), ids.clone())),
        authentication_repository: Arc::new(InMemoryAuthenticationRepository::new(db.clone())),
        thread_repository: Arc::new(InMemoryThreadRepository::new(db.clone(), ids.clone())),
        comment_repository: Arc::new(InMemoryCommentRepository::new(db, ids)),
        token_manager: Arc::new(JwtTokenManager::new(
            b"access_test_key",
            b"refresh_test_key",
            Duration::from_secs(3000),
        )),
        password_hash: Arc::new(FakePasswordHash),
    }
}

pub async fn register_user(backend: &Backend, username: &str) -> UserId {
    let use_case = AddUserUseCase::new(
        backend.user_repository.clone(),
        backend.password_hash.clone(),
    );
    use_case
        .execute(&json!({
            "username": username,
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        }))
        .await
        .unwrap()
        .id
}

pub async fn create_thread(backend: &Backend, owner: &UserId) -> ThreadId {
    let use_case = AddThreadUseCase::new(backend.thread_repository.clone());
    use_case
        .execute(&json!({
            "title": "sebuah thread",
            "body": "sebuah body thread",
            "owner": owner.as_str(),
        }))
        .await
        .unwrap()
        .id
}
