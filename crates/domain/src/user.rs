//! User entities: registration payload, registration acknowledgement, login
//! payload.
//!
//! Identity is created once at registration and immutable afterwards; the
//! password field is opaque to this crate (hashing happens behind the
//! application layer's `PasswordHash` port).

use serde::Serialize;
use serde_json::Value;

use diskus_core::{DomainError, DomainResult, UserId};

use crate::payload::require_str;

const USERNAME_MAX_LEN: usize = 50;

/// Inbound payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    const ENTITY: &'static str = "REGISTER_USER";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let username = require_str(payload, Self::ENTITY, "username")?;
        let password = require_str(payload, Self::ENTITY, "password")?;
        let fullname = require_str(payload, Self::ENTITY, "fullname")?;

        if username.len() > USERNAME_MAX_LEN {
            return Err(DomainError::shape("REGISTER_USER.USERNAME_LIMIT_CHAR"));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(DomainError::shape(
                "REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER",
            ));
        }

        Ok(Self {
            username,
            password,
            fullname,
        })
    }

    /// Replace the clear-text password with its hash before persistence.
    pub fn with_hashed_password(self, hashed: String) -> Self {
        Self {
            password: hashed,
            ..self
        }
    }
}

/// Acknowledgement returned after a user is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    const ENTITY: &'static str = "REGISTERED_USER";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            id: UserId::new(require_str(payload, Self::ENTITY, "id")?),
            username: require_str(payload, Self::ENTITY, "username")?,
            fullname: require_str(payload, Self::ENTITY, "fullname")?,
        })
    }
}

/// Inbound payload for logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    const ENTITY: &'static str = "USER_LOGIN";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            username: require_str(payload, Self::ENTITY, "username")?,
            password: require_str(payload, Self::ENTITY, "password")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_user_requires_all_properties() {
        let payload = json!({ "username": "dicoding", "password": "secret" });
        assert_eq!(
            RegisterUser::from_payload(&payload).unwrap_err(),
            DomainError::missing_property("REGISTER_USER")
        );
    }

    #[test]
    fn register_user_rejects_wrong_types() {
        let payload = json!({ "username": "dicoding", "password": true, "fullname": "Dicoding" });
        assert_eq!(
            RegisterUser::from_payload(&payload).unwrap_err(),
            DomainError::wrong_data_type("REGISTER_USER")
        );
    }

    #[test]
    fn register_user_rejects_overlong_username() {
        let payload = json!({
            "username": "a".repeat(51),
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        });
        assert_eq!(
            RegisterUser::from_payload(&payload).unwrap_err(),
            DomainError::shape("REGISTER_USER.USERNAME_LIMIT_CHAR")
        );
    }

    #[test]
    fn register_user_rejects_restricted_characters() {
        let payload = json!({
            "username": "dico ding",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        });
        assert_eq!(
            RegisterUser::from_payload(&payload).unwrap_err(),
            DomainError::shape("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")
        );
    }

    #[test]
    fn register_user_builds_from_valid_payload() {
        let payload = json!({
            "username": "dicoding",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        });
        let user = RegisterUser::from_payload(&payload).unwrap();
        assert_eq!(user.username, "dicoding");
        assert_eq!(user.password, "secret");
        assert_eq!(user.fullname, "Dicoding Indonesia");
    }

    #[test]
    fn hashing_replaces_only_the_password() {
        let user = RegisterUser {
            username: "dicoding".to_string(),
            password: "secret".to_string(),
            fullname: "Dicoding Indonesia".to_string(),
        };
        let hashed = user.with_hashed_password("hashed_secret".to_string());
        assert_eq!(hashed.password, "hashed_secret");
        assert_eq!(hashed.username, "dicoding");
    }

    #[test]
    fn user_login_requires_both_credentials() {
        let payload = json!({ "username": "dicoding" });
        assert_eq!(
            UserLogin::from_payload(&payload).unwrap_err(),
            DomainError::missing_property("USER_LOGIN")
        );
    }

    #[test]
    fn registered_user_builds_from_valid_payload() {
        let payload = json!({
            "id": "user-123",
            "username": "dicoding",
            "fullname": "Dicoding Indonesia",
        });
        let user = RegisteredUser::from_payload(&payload).unwrap();
        assert_eq!(user.id, UserId::new("user-123"));
    }
}
