//! Register a new user.

use std::sync::Arc;

use serde_json::Value;

use diskus_core::DomainResult;
use diskus_domain::{RegisterUser, RegisteredUser, UserRepository};

use crate::security::PasswordHash;

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> DomainResult<RegisteredUser> {
        let register_user = RegisterUser::from_payload(payload)?;
        self.user_repository
            .verify_available_username(&register_user.username)
            .await?;

        let hashed = self.password_hash.hash(&register_user.password).await?;
        let register_user = register_user.with_hashed_password(hashed);

        self.user_repository.add_user(&register_user).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use diskus_core::{DomainError, UserId};

    use super::*;
    use crate::test_support::backend;

    #[tokio::test]
    async fn registers_user_with_hashed_password() {
        let backend = backend();
        let use_case = AddUserUseCase::new(
            backend.user_repository.clone(),
            backend.password_hash.clone(),
        );

        let registered = use_case
            .execute(&json!({
                "username": "dicoding",
                "password": "secret",
                "fullname": "Dicoding Indonesia",
            }))
            .await
            .unwrap();

        assert_eq!(registered.id, UserId::new("user-123"));
        assert_eq!(registered.username, "dicoding");
        assert_eq!(registered.fullname, "Dicoding Indonesia");

        // The clear text never reaches the repository.
        let stored = backend
            .user_repository
            .get_password_by_username("dicoding")
            .await
            .unwrap();
        assert_eq!(stored, "hashed:secret");
    }

    #[tokio::test]
    async fn rejects_taken_username_before_hashing() {
        let backend = backend();
        let use_case = AddUserUseCase::new(
            backend.user_repository.clone(),
            backend.password_hash.clone(),
        );
        let payload = json!({
            "username": "dicoding",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        });

        use_case.execute(&payload).await.unwrap();
        assert_eq!(
            use_case.execute(&payload).await.unwrap_err(),
            DomainError::invariant("username tidak tersedia")
        );
    }

    #[tokio::test]
    async fn rejects_malformed_payload() {
        let backend = backend();
        let use_case = AddUserUseCase::new(
            backend.user_repository.clone(),
            backend.password_hash.clone(),
        );

        assert_eq!(
            use_case
                .execute(&json!({"username": "dicoding", "password": "secret"}))
                .await
                .unwrap_err(),
            DomainError::missing_property("REGISTER_USER")
        );
    }
}
