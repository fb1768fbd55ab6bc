//! Token-manager port.

use diskus_core::DomainResult;

use crate::claims::TokenClaims;

/// Produces and verifies the two token kinds.
///
/// Access tokens are short-lived signed assertions verified purely by
/// signature + expiry. Refresh tokens are long-lived and persisted;
/// [`decode_refresh_token`](Self::decode_refresh_token) is a structural
/// decode with **no trust decision** — trust is established exclusively by
/// the token's presence in the authentication store, so a syntactically
/// valid but revoked token must still be rejected by the caller.
pub trait AuthenticationTokenManager: Send + Sync {
    /// Sign an access token embedding an expiry.
    fn create_access_token(&self, claims: &TokenClaims) -> DomainResult<String>;

    /// Sign a refresh token (no expiry; lifetime is governed by revocation).
    fn create_refresh_token(&self, claims: &TokenClaims) -> DomainResult<String>;

    /// Signature and expiry must both hold; any tampering or expiry fails
    /// closed.
    fn verify_access_token(&self, token: &str) -> DomainResult<TokenClaims>;

    /// Structural decode of a refresh token's claims.
    fn decode_refresh_token(&self, token: &str) -> DomainResult<TokenClaims>;
}
