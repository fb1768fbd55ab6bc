//! Raw-mapping extraction helpers shared by entity constructors.
//!
//! Every inbound payload and outbound view is validated against the same two
//! failure kinds: a missing key fails with
//! `<ENTITY>.NOT_CONTAIN_NEEDED_PROPERTY`, a present key of the wrong
//! primitive type fails with `<ENTITY>.NOT_MEET_DATA_TYPE_SPECIFICATION`.
//! Extra keys are dropped silently.

use chrono::{DateTime, Utc};
use serde_json::Value;

use diskus_core::{DomainError, DomainResult};

/// Extract a required, non-empty string field.
///
/// An empty string is present and correctly typed but does not meet the
/// field specification, so it fails with the data-type code.
pub fn require_str(payload: &Value, entity: &str, key: &str) -> DomainResult<String> {
    let value = payload
        .get(key)
        .ok_or_else(|| DomainError::missing_property(entity))?;
    let s = value
        .as_str()
        .ok_or_else(|| DomainError::wrong_data_type(entity))?;
    if s.is_empty() {
        return Err(DomainError::wrong_data_type(entity));
    }
    Ok(s.to_string())
}

/// Extract a required boolean field.
pub fn require_bool(payload: &Value, entity: &str, key: &str) -> DomainResult<bool> {
    payload
        .get(key)
        .ok_or_else(|| DomainError::missing_property(entity))?
        .as_bool()
        .ok_or_else(|| DomainError::wrong_data_type(entity))
}

/// Extract a required sequence field (must be an array, not a scalar).
pub fn require_array<'a>(
    payload: &'a Value,
    entity: &str,
    key: &str,
) -> DomainResult<&'a Vec<Value>> {
    payload
        .get(key)
        .ok_or_else(|| DomainError::missing_property(entity))?
        .as_array()
        .ok_or_else(|| DomainError::wrong_data_type(entity))
}

/// Extract a required RFC3339 timestamp field.
pub fn require_date(payload: &Value, entity: &str, key: &str) -> DomainResult<DateTime<Utc>> {
    let raw = require_str(payload, entity, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::wrong_data_type(entity))
}
