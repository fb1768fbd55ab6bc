//! Argon2 password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash as ParsedHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use diskus_app::PasswordHash;
use diskus_core::{DomainError, DomainResult};

const WRONG_CREDENTIAL: &str = "kredensial yang Anda masukkan salah";

/// Argon2id backend for the [`PasswordHash`] port.
///
/// The salt and parameters ride inside the PHC string, so verification needs
/// no state beyond the stored hash itself.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHash {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PasswordHash for Argon2PasswordHash {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("hash_password: {e}")))?;
        Ok(hash.to_string())
    }

    async fn compare_password(&self, plain: &str, hashed: &str) -> DomainResult<()> {
        // An unparseable stored hash is indistinguishable from a mismatch to
        // the caller; both must read as a failed credential.
        let parsed =
            ParsedHash::new(hashed).map_err(|_| DomainError::authentication(WRONG_CREDENTIAL))?;
        self.argon2
            .verify_password(plain.as_bytes(), &parsed)
            .map_err(|_| DomainError::authentication(WRONG_CREDENTIAL))
    }
}
