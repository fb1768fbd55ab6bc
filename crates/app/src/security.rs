//! Password-hashing port.

use async_trait::async_trait;

use diskus_core::DomainResult;

/// One-way password comparator.
///
/// The hash format is opaque to this layer; the backend owns salt handling
/// and work factors.
#[async_trait]
pub trait PasswordHash: Send + Sync {
    async fn hash(&self, password: &str) -> DomainResult<String>;

    /// Fails with `Authentication("kredensial yang Anda masukkan salah")`
    /// on mismatch.
    async fn compare_password(&self, plain: &str, hashed: &str) -> DomainResult<()>;
}
