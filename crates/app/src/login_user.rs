//! Issue a session: authenticate credentials, mint both tokens, record the
//! refresh token in the revocation ledger.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use diskus_auth::{AuthenticationTokenManager, TokenClaims};
use diskus_core::DomainResult;
use diskus_domain::{AuthenticationRepository, UserLogin, UserRepository};

use crate::security::PasswordHash;

/// A freshly issued session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthentication {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hash: Arc<dyn PasswordHash>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> DomainResult<NewAuthentication> {
        let login = UserLogin::from_payload(payload)?;

        let hashed = self
            .user_repository
            .get_password_by_username(&login.username)
            .await?;
        self.password_hash
            .compare_password(&login.password, &hashed)
            .await?;

        let id = self
            .user_repository
            .get_id_by_username(&login.username)
            .await?;
        let claims = TokenClaims::new(id, login.username);

        let access_token = self.token_manager.create_access_token(&claims)?;
        let refresh_token = self.token_manager.create_refresh_token(&claims)?;

        // Token issuance must not be retried blindly: re-running this would
        // mint a second live session.
        self.authentication_repository
            .add_token(&refresh_token)
            .await?;

        Ok(NewAuthentication {
            access_token,
            refresh_token,
        })
    }
}
