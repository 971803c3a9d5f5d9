//! Cross-cutting error types for folio.
//!
//! Domain-specific errors (e.g., `ContentError`, `ContactError`) are defined in
//! their respective crates. `folio-cli` converges everything on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Content lookup returned no result.
    #[error("Content not found: {kind} {id}")]
    NotFound { kind: String, id: String },

    /// An identifier did not name a known content kind.
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
