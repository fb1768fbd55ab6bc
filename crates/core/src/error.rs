//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in the forum core is one of these kinds, raised at the point
/// of detection and propagated unmodified up to the HTTP boundary, which owns
/// the mapping to a transport status. The core never retries and never
/// swallows an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw payload was malformed or incomplete (entity shape violation).
    ///
    /// Carries a machine-readable code such as
    /// `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
    #[error("{0}")]
    Shape(String),

    /// A domain rule was violated (e.g. revoked/unknown refresh token,
    /// username already taken).
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// A credential or token proof failed (wrong password, bad signature,
    /// expired access token).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The caller lacks rights over the resource.
    #[error("forbidden: {0}")]
    Authorization(String),

    /// A referenced entity is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Infrastructure failure (storage, runtime). Never raised by entities.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn shape(code: impl Into<String>) -> Self {
        Self::Shape(code.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Code for a payload missing a required key.
    pub fn missing_property(entity: &str) -> Self {
        Self::Shape(format!("{entity}.NOT_CONTAIN_NEEDED_PROPERTY"))
    }

    /// Code for a payload key holding the wrong primitive type.
    pub fn wrong_data_type(entity: &str) -> Self {
        Self::Shape(format!("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_codes_follow_entity_prefix() {
        assert_eq!(
            DomainError::missing_property("NEW_THREAD"),
            DomainError::Shape("NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY".to_string())
        );
        assert_eq!(
            DomainError::wrong_data_type("NEW_COMMENT"),
            DomainError::Shape("NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION".to_string())
        );
    }

    #[test]
    fn shape_error_displays_bare_code() {
        let err = DomainError::missing_property("USER_LOGIN");
        assert_eq!(err.to_string(), "USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY");
    }
}
