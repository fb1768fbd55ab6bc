//! Strongly-typed identifiers used across the domain.
//!
//! Forum identifiers are opaque strings of the form `<prefix>-<suffix>`
//! (`user-…`, `thread-…`, `comment-…`). The random suffix comes from an
//! injected generator; uniqueness is delegated to that generator and to the
//! storage engine's primary-key constraint.

use serde::{Deserialize, Serialize};

/// Identifier of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

/// Identifier of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $prefix:literal) => {
        impl $t {
            /// Wrap an already-minted identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint an identifier from a generated random suffix.
            pub fn from_suffix(suffix: &str) -> Self {
                Self(format!(concat!($prefix, "-{}"), suffix))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(UserId, "user");
impl_string_newtype!(ThreadId, "thread");
impl_string_newtype!(CommentId, "comment");
