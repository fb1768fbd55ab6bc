//! `diskus-auth` — token issuance and verification.
//!
//! This crate is intentionally decoupled from HTTP and storage: it performs
//! cryptographic computation only. Whether a refresh token is still *trusted*
//! is decided elsewhere, by the authentication store's revocation ledger.

pub mod claims;
pub mod jwt;
pub mod manager;

pub use claims::TokenClaims;
pub use jwt::JwtTokenManager;
pub use manager::AuthenticationTokenManager;
