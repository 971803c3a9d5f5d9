//! # folio-schema
//!
//! Schema validation for folio content.
//!
//! This crate provides:
//! - [`Schema`]: a compiled JSON Schema for a content type, generated from the
//!   type's `JsonSchema` derive and checked with `jsonschema`
//! - [`validate_with_details`] and friends: validation that never panics on bad
//!   data and returns a normalized list of [`ValidationError`]s
//! - Report helpers that aggregate per-file results into a
//!   [`ContentValidationReport`] and render it for the console
//! - Single-value checks (slug, URL, email, ISO 8601 date)
//! - [`SchemaRegistry`]: named schemas for export and ad-hoc validation
//!
//! ## Architecture
//!
//! Entity types are defined in `folio-core` with `#[derive(JsonSchema)]`.
//! This crate turns those derives into validators and adds the domain rules a
//! declarative schema cannot express ([`ContentRules`]).

pub mod checks;
mod error;
pub mod registry;
pub mod report;
mod rules;
mod schema;
mod types;
mod validate;

pub use checks::{validate_date, validate_email, validate_project_slug, validate_url};
pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use report::{
    ContentValidationReport, FileValidationResult, ReportSummary, create_validation_report,
    format_validation_errors, format_validation_report,
};
pub use rules::ContentRules;
pub use schema::Schema;
pub use types::{ErrorKind, ROOT_FIELD, ValidationError, ValidationResult};
pub use validate::{
    BatchItem, BatchResult, ValidatedWithWarnings, batch_validate, validate_content_with_warnings,
    validate_with_details,
};
