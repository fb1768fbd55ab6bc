//! HS256 JWT implementation of the token-manager port.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use diskus_core::{DomainError, DomainResult, UserId};

use crate::claims::TokenClaims;
use crate::manager::AuthenticationTokenManager;

/// Wire-level JWT claims. `exp` is present on access tokens only.
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    id: String,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

/// Signs access tokens with one key and refresh tokens with another.
///
/// Both kinds are signed, but only the access-token signature participates
/// in a trust decision; refresh-token trust lives in the revocation ledger.
pub struct JwtTokenManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    access_token_age: Duration,
}

impl JwtTokenManager {
    pub fn new(access_key: &[u8], refresh_key: &[u8], access_token_age: Duration) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_key),
            access_decoding: DecodingKey::from_secret(access_key),
            refresh_encoding: EncodingKey::from_secret(refresh_key),
            access_token_age,
        }
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, claims: &TokenClaims) -> DomainResult<String> {
        let exp = Utc::now().timestamp() as u64 + self.access_token_age.as_secs();
        let claims = JwtClaims {
            id: claims.id.as_str().to_string(),
            username: claims.username.clone(),
            exp: Some(exp),
        };
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| DomainError::internal(format!("failed to sign access token: {e}")))
    }

    fn create_refresh_token(&self, claims: &TokenClaims) -> DomainResult<String> {
        let claims = JwtClaims {
            id: claims.id.as_str().to_string(),
            username: claims.username.clone(),
            exp: None,
        };
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| DomainError::internal(format!("failed to sign refresh token: {e}")))
    }

    fn verify_access_token(&self, token: &str) -> DomainResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<JwtClaims>(token, &self.access_decoding, &validation)
            .map_err(|_| DomainError::authentication("access token tidak valid"))?;

        Ok(TokenClaims::new(
            UserId::new(data.claims.id),
            data.claims.username,
        ))
    }

    fn decode_refresh_token(&self, token: &str) -> DomainResult<TokenClaims> {
        // Structural decode only: the signature is deliberately not part of
        // the trust decision, and refresh tokens carry no expiry.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let key = DecodingKey::from_secret(&[]);
        let data = decode::<JwtClaims>(token, &key, &validation)
            .map_err(|_| DomainError::authentication("refresh token tidak valid"))?;

        Ok(TokenClaims::new(
            UserId::new(data.claims.id),
            data.claims.username,
        ))
    }
}
