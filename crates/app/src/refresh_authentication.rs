//! Refresh a session: the ledger is consulted before any claim is trusted.

use std::sync::Arc;

use serde_json::Value;

use diskus_auth::AuthenticationTokenManager;
use diskus_core::{DomainError, DomainResult};
use diskus_domain::AuthenticationRepository;

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    pub async fn execute(&self, payload: &Value) -> DomainResult<String> {
        let refresh_token = verify_payload(payload)?;

        // Availability first: a syntactically valid but revoked token must
        // be rejected before its claims are decoded or trusted.
        self.authentication_repository
            .check_availability_token(refresh_token)
            .await?;

        let claims = self.token_manager.decode_refresh_token(refresh_token)?;
        self.token_manager.create_access_token(&claims)
    }
}

fn verify_payload(payload: &Value) -> DomainResult<&str> {
    let token = payload.get("refreshToken").ok_or_else(|| {
        DomainError::shape("REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN")
    })?;
    token.as_str().ok_or_else(|| {
        DomainError::shape(
            "REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION",
        )
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use diskus_auth::TokenClaims;
    use diskus_core::UserId;

    use super::*;
    use crate::test_support::backend;

    fn use_case(backend: &crate::test_support::Backend) -> RefreshAuthenticationUseCase {
        RefreshAuthenticationUseCase::new(
            backend.authentication_repository.clone(),
            backend.token_manager.clone(),
        )
    }

    #[tokio::test]
    async fn mints_new_access_token_for_live_refresh_token() {
        let backend = backend();
        let claims = TokenClaims::new(UserId::new("user-123"), "dicoding");
        let refresh_token = backend.token_manager.create_refresh_token(&claims).unwrap();
        backend
            .authentication_repository
            .add_token(&refresh_token)
            .await
            .unwrap();

        let access_token = use_case(&backend)
            .execute(&json!({"refreshToken": refresh_token}))
            .await
            .unwrap();

        let verified = backend
            .token_manager
            .verify_access_token(&access_token)
            .unwrap();
        assert_eq!(verified, claims);
    }

    #[tokio::test]
    async fn well_formed_but_unrecorded_token_is_rejected() {
        let backend = backend();
        let claims = TokenClaims::new(UserId::new("user-123"), "dicoding");
        // Decodes fine; trust must still come from the ledger alone.
        let refresh_token = backend.token_manager.create_refresh_token(&claims).unwrap();

        assert_eq!(
            use_case(&backend)
                .execute(&json!({"refreshToken": refresh_token}))
                .await
                .unwrap_err(),
            DomainError::invariant("refresh token tidak ditemukan di database")
        );
    }

    #[tokio::test]
    async fn rejects_payload_without_token() {
        let backend = backend();
        assert_eq!(
            use_case(&backend).execute(&json!({})).await.unwrap_err(),
            DomainError::shape("REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN")
        );
    }

    #[tokio::test]
    async fn rejects_non_string_token() {
        let backend = backend();
        assert_eq!(
            use_case(&backend)
                .execute(&json!({"refreshToken": 123}))
                .await
                .unwrap_err(),
            DomainError::shape(
                "REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION"
            )
        );
    }
}
