use std::path::PathBuf;

use folio_schema::{SchemaError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content in {}: {}", .path.display(), join_errors(.errors))]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
    #[error("invalid front matter in {}: {reason}", .path.display())]
    FrontMatter { path: PathBuf, reason: String },
    #[error("{skipped} {collection} file(s) failed validation, more than the limit of {limit}")]
    TooManySkipped {
        collection: String,
        skipped: usize,
        limit: usize,
    },
    #[error("all {skipped} {collection} file(s) failed validation")]
    NoValidItems { collection: String, skipped: usize },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ContentError {
    /// Field-level errors carried by a validation failure.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
