//! Validation entry points.
//!
//! None of these functions panic or return early on bad data: every
//! problem is reported as a [`ValidationError`].

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::rules::ContentRules;
use crate::schema::Schema;
use crate::types::{ErrorKind, ValidationError, ValidationResult, lookup};

/// Validate `data` against `schema` and decode it into `T`.
///
/// Runs the JSON Schema, then serde decoding, then the type's
/// [`ContentRules`]. The first stage that reports problems decides the
/// result; stages after it do not run.
///
/// # Errors
///
/// Returns every field-level error the failing stage found.
pub fn validate_with_details<T>(data: &Value, schema: &Schema<T>) -> ValidationResult<T>
where
    T: DeserializeOwned + ContentRules,
{
    let violations = schema.violations(data);
    if !violations.is_empty() {
        return Err(violations);
    }

    let value: T = serde_json::from_value(data.clone()).map_err(|e| {
        vec![ValidationError::root(e.to_string(), ErrorKind::InvalidType).with_value(data.clone())]
    })?;

    let rule_errors = value.check_rules();
    if rule_errors.is_empty() {
        Ok(value)
    } else {
        Err(rule_errors)
    }
}

/// Outcome of [`validate_content_with_warnings`].
#[derive(Debug, Clone)]
pub struct ValidatedWithWarnings<T> {
    pub result: ValidationResult<T>,
    /// Recommended fields that are empty. Never affects `result`.
    pub warnings: Vec<ValidationError>,
}

impl<T> ValidatedWithWarnings<T> {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Validate like [`validate_with_details`], then flag recommended fields.
///
/// For a valid value, each dot path in `warning_fields` that is absent,
/// null, an empty string, or an empty list produces a
/// `missing_recommended` warning. Invalid values get no warnings.
pub fn validate_content_with_warnings<T>(
    data: &Value,
    schema: &Schema<T>,
    warning_fields: &[&str],
) -> ValidatedWithWarnings<T>
where
    T: DeserializeOwned + ContentRules,
{
    let result = validate_with_details(data, schema);
    let warnings = if result.is_ok() {
        missing_recommended(data, warning_fields)
    } else {
        Vec::new()
    };

    ValidatedWithWarnings { result, warnings }
}

pub(crate) fn missing_recommended(data: &Value, warning_fields: &[&str]) -> Vec<ValidationError> {
    warning_fields
        .iter()
        .filter_map(|field| {
            let value = lookup(data, field);
            let empty = match value {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(Value::Array(items)) => items.is_empty(),
                Some(_) => false,
            };
            empty.then(|| {
                let warning = ValidationError::new(
                    *field,
                    format!("Optional field '{field}' is empty but recommended"),
                    ErrorKind::MissingRecommended,
                );
                match value {
                    Some(v) => warning.with_value(v.clone()),
                    None => warning,
                }
            })
        })
        .collect()
}

/// One input to [`batch_validate`].
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub data: Value,
    /// Where the data came from, e.g. a file path.
    pub context: Option<String>,
}

impl BatchItem {
    #[must_use]
    pub fn new(data: Value, context: impl Into<String>) -> Self {
        Self {
            data,
            context: Some(context.into()),
        }
    }
}

/// One output of [`batch_validate`], tagged with its input's context.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult<T> {
    pub context: Option<String>,
    pub result: ValidationResult<T>,
}

/// Validate each item independently against the same schema.
#[must_use]
pub fn batch_validate<T>(items: &[BatchItem], schema: &Schema<T>) -> Vec<BatchResult<T>>
where
    T: DeserializeOwned + ContentRules + JsonSchema,
{
    items
        .iter()
        .map(|item| BatchResult {
            context: item.context.clone(),
            result: validate_with_details(&item.data, schema),
        })
        .collect()
}
