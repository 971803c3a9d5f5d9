use folio_core::errors::CoreError;
use folio_schema::{ValidationError, ValidationResult, format_validation_errors};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::output;

/// Printed result of checking one value or document.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl CheckOutcome {
    #[must_use]
    pub const fn passed(value: Option<String>) -> Self {
        Self {
            valid: true,
            value,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub const fn failed(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: false,
            value: None,
            errors,
        }
    }
}

impl From<ValidationResult<String>> for CheckOutcome {
    fn from(result: ValidationResult<String>) -> Self {
        match result {
            Ok(value) => Self::passed(Some(value)),
            Err(errors) => Self::failed(errors),
        }
    }
}

/// Print `outcome`, then fail with the joined messages if it is invalid.
pub fn report(outcome: &CheckOutcome, format: OutputFormat) -> anyhow::Result<()> {
    output(outcome, format)?;
    if outcome.valid {
        return Ok(());
    }
    Err(CoreError::Validation(format_validation_errors(&outcome.errors).join("; ")).into())
}
