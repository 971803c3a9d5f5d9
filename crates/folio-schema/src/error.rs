//! Schema error types.

use thiserror::Error;

use crate::types::ValidationError;

/// Errors from building schemas or validating against the registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A generated schema could not be compiled into a validator.
    #[error("Schema '{name}' failed to compile: {reason}")]
    Compile { name: String, reason: String },

    /// JSON value did not pass schema validation.
    #[error("Validation failed with {} error(s)", .errors.len())]
    ValidationFailed {
        /// Normalized field-level errors.
        errors: Vec<ValidationError>,
    },
}
