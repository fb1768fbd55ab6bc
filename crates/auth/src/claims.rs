//! Token claims model (transport-agnostic).

use serde::{Deserialize, Serialize};

use diskus_core::UserId;

/// The identity a token asserts.
///
/// This is the minimal claim set the forum expects once a token has been
/// decoded: who the caller is (`id`) and the username shown next to their
/// contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: UserId,
    pub username: String,
}

impl TokenClaims {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
