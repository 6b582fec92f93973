//! Validation error types

use thiserror::Error;

/// Request input that could not be turned into a domain value
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Body is not a JSON album (syntax error, wrong types, wrong content type)
    #[error("invalid JSON provided: {reason}")]
    MalformedBody { reason: String },
}
