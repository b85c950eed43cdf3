//! Wire and domain models for the bizdesk service: the five business entities,
//! their request/response types, and the dashboard aggregate shapes.

use thiserror::Error;

pub mod client;
pub mod dashboard;
pub mod document;
pub mod project;
pub mod response;
pub mod target;
pub mod transaction;
pub mod user;

/// A required-field or enumeration violation detected before anything is written
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// shorthand for the common "field is required" case
    pub fn required(field: &str) -> Self {
        ValidationError(format!("{field} is required"))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a required string field carries a non-blank value
pub(crate) fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates an optional field only when the caller supplied it
pub(crate) fn require_if_present(
    field: &str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => require(field, v),
        None => Ok(()),
    }
}
