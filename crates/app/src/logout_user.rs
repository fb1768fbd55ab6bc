//! End a session by revoking its refresh token.

use std::sync::Arc;

use serde_json::Value;

use diskus_core::{DomainError, DomainResult};
use diskus_domain::AuthenticationRepository;

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    /// Logout is idempotent: revoking an already-revoked or unknown token
    /// succeeds.
    pub async fn execute(&self, payload: &Value) -> DomainResult<()> {
        let refresh_token = verify_payload(payload)?;
        self.authentication_repository
            .delete_token(refresh_token)
            .await
    }
}

fn verify_payload(payload: &Value) -> DomainResult<&str> {
    let token = payload.get("refreshToken").ok_or_else(|| {
        DomainError::shape("DELETE_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN")
    })?;
    token.as_str().ok_or_else(|| {
        DomainError::shape("DELETE_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")
    })
}
