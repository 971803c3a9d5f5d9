//! Compiled schemas generated from `JsonSchema` derives.

use std::fmt;
use std::marker::PhantomData;

use jsonschema::Validator;
use jsonschema::error::ValidationErrorKind;
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::SchemaError;
use crate::types::{ErrorKind, ValidationError, pointer_to_field};

/// A compiled JSON Schema for values of type `T`.
///
/// Built once from `T`'s schemars output and reused for every validation.
/// Format assertions (`email`, `uri`) are enabled so that format attributes on
/// fields are enforced rather than treated as annotations.
pub struct Schema<T> {
    name: String,
    json: Value,
    validator: Validator,
    _marker: PhantomData<fn() -> T>,
}

impl<T: JsonSchema> Schema<T> {
    /// Generate and compile the schema for `T`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the generated schema does not
    /// compile. This indicates a bug in a type's schemars attributes, not
    /// bad input data.
    pub fn compile() -> Result<Self, SchemaError> {
        let name = T::schema_name().into_owned();
        let json = schema_for!(T).to_value();
        let validator = compile_value(&name, &json)?;

        Ok(Self {
            name,
            json,
            validator,
            _marker: PhantomData,
        })
    }
}

impl<T> Schema<T> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generated JSON Schema document.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.json
    }

    /// Every schema violation in `instance`, normalized.
    #[must_use]
    pub fn violations(&self, instance: &Value) -> Vec<ValidationError> {
        violations(&self.validator, instance)
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("name", &self.name).finish_non_exhaustive()
    }
}

pub(crate) fn compile_value(name: &str, json: &Value) -> Result<Validator, SchemaError> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(json)
        .map_err(|e| SchemaError::Compile {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

pub(crate) fn violations(validator: &Validator, instance: &Value) -> Vec<ValidationError> {
    validator
        .iter_errors(instance)
        .map(|error| normalize(&error))
        .collect()
}

/// Turn a jsonschema error into a [`ValidationError`].
///
/// A missing property is reported at the property's own path (`links.github`)
/// with no value, rather than at the parent object.
fn normalize(error: &jsonschema::ValidationError<'_>) -> ValidationError {
    let mut field = pointer_to_field(&error.instance_path.to_string());
    let message = error.to_string();

    if let ValidationErrorKind::Required { property } = &error.kind {
        let property = property
            .as_str()
            .map_or_else(|| property.to_string(), str::to_string);
        field = if field.is_empty() {
            property
        } else {
            format!("{field}.{property}")
        };
        return ValidationError::new(field, message, ErrorKind::Required);
    }

    ValidationError::new(field, message, classify(&error.kind))
        .with_value(error.instance.clone().into_owned())
}

fn classify(kind: &ValidationErrorKind) -> ErrorKind {
    match kind {
        ValidationErrorKind::Required { .. } => ErrorKind::Required,
        ValidationErrorKind::Type { .. } => ErrorKind::InvalidType,
        ValidationErrorKind::MinLength { .. }
        | ValidationErrorKind::MinItems { .. }
        | ValidationErrorKind::MinProperties { .. }
        | ValidationErrorKind::Minimum { .. }
        | ValidationErrorKind::ExclusiveMinimum { .. } => ErrorKind::TooSmall,
        ValidationErrorKind::MaxLength { .. }
        | ValidationErrorKind::MaxItems { .. }
        | ValidationErrorKind::MaxProperties { .. }
        | ValidationErrorKind::Maximum { .. }
        | ValidationErrorKind::ExclusiveMaximum { .. } => ErrorKind::TooBig,
        ValidationErrorKind::Pattern { .. } => ErrorKind::InvalidString,
        ValidationErrorKind::Format { format } => match format.as_str() {
            "uri" | "uri-reference" | "iri" => ErrorKind::InvalidUrl,
            "email" | "idn-email" => ErrorKind::InvalidEmail,
            "date" | "date-time" => ErrorKind::InvalidDate,
            _ => ErrorKind::InvalidFormat,
        },
        ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
            ErrorKind::InvalidEnumValue
        }
        ValidationErrorKind::AdditionalProperties { .. }
        | ValidationErrorKind::UnevaluatedProperties { .. } => ErrorKind::UnrecognizedKeys,
        _ => ErrorKind::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::entities::{Project, SkillGroup};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn compiles_every_content_schema() {
        assert!(Schema::<Project>::compile().is_ok());
        assert!(Schema::<Vec<SkillGroup>>::compile().is_ok());
    }

    #[test]
    fn missing_property_is_reported_at_its_own_path() {
        let schema = Schema::<Project>::compile().unwrap();
        let errors = schema.violations(&json!({ "links": {} }));
        let fields: Vec<&str> = errors
            .iter()
            .filter(|e| e.code == ErrorKind::Required)
            .map(|e| e.field.as_str())
            .collect();
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"tech"));
        assert!(errors.iter().all(|e| e.code != ErrorKind::Required || e.value.is_none()));
    }

    #[test]
    fn nested_errors_carry_dot_paths_and_values() {
        let schema = Schema::<Project>::compile().unwrap();
        let errors = schema.violations(&json!({
            "slug": "ok",
            "name": "Name",
            "summary": "Long enough summary",
            "tech": ["Rust"],
            "links": { "live": "not a url" },
            "impact": ["x"],
            "role": "dev",
            "images": [{ "src": "/a.png", "alt": "" }]
        }));
        let live = errors.iter().find(|e| e.field == "links.live").expect("live error");
        assert_eq!(live.code, ErrorKind::InvalidUrl);
        assert_eq!(live.value, Some(json!("not a url")));

        let alt = errors.iter().find(|e| e.field == "images.0.alt").expect("alt error");
        assert_eq!(alt.code, ErrorKind::TooSmall);
    }

    #[test]
    fn type_mismatch_at_top_level_is_root() {
        let schema = Schema::<Project>::compile().unwrap();
        let errors = schema.violations(&json!("just a string"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "root");
        assert_eq!(errors[0].code, ErrorKind::InvalidType);
    }
}
