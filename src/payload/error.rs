//! Validation failures raised while encoding a payload.

use thiserror::Error;

/// Errors that can occur when building a payload from form input.
///
/// Every variant is a caller-input problem. Encoding is all-or-nothing, so an
/// error always means no payload was produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field was present but malformed.
    #[error("{0} is invalid")]
    InvalidField(&'static str),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) | ValidationError::InvalidField(field) => field,
        }
    }
}
