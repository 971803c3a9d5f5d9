//! Named registry of folio content schemas.
//!
//! The `SchemaRegistry` builds JSON Schemas from folio-core types at
//! construction time using [`schemars::schema_for!`] and validates arbitrary
//! JSON against them by name. Other crates add their own schemas through
//! [`SchemaRegistry::register`].

use std::collections::HashMap;

use folio_core::entities::{
    CaseStudyFrontmatter, Certification, Experience, ProfileData, Project, SkillGroup,
};
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::{compile_value, violations};

/// Central store of the JSON Schemas folio validates content against.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

impl SchemaRegistry {
    /// Build a registry containing every content schema: each entity on its
    /// own plus the list forms used by the single-file collections.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: HashMap::new(),
        };

        registry.register::<ProfileData>("profile");
        registry.register::<SkillGroup>("skill_group");
        registry.register::<Vec<SkillGroup>>("skill_groups");
        registry.register::<Project>("project");
        registry.register::<Certification>("certification");
        registry.register::<Vec<Certification>>("certifications");
        registry.register::<Experience>("experience");
        registry.register::<Vec<Experience>>("experiences");
        registry.register::<CaseStudyFrontmatter>("case_study_frontmatter");

        registry
    }

    /// Add (or replace) the schema for `T` under `name`.
    pub fn register<T: JsonSchema>(&mut self, name: &'static str) {
        self.schemas.insert(name, schema_for!(T).to_value());
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown,
    /// `SchemaError::Compile` if the stored schema does not compile, or
    /// `SchemaError::ValidationFailed` with normalized field errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = compile_value(name, schema)?;
        let errors = violations(&validator, instance);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    fn valid_experience() -> Value {
        json!({
            "company": "Example Corp",
            "role": "Engineer",
            "startDate": "2021-03",
            "location": "Remote",
            "description": "Maintained the billing platform.",
            "achievements": ["Migrated invoices"]
        })
    }

    #[test]
    fn registry_has_expected_count() {
        // 6 entities + 3 list forms
        assert_eq!(registry().schema_count(), 9);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        for name in [
            "profile",
            "skill_group",
            "skill_groups",
            "project",
            "certification",
            "certifications",
            "experience",
            "experiences",
            "case_study_frontmatter",
        ] {
            assert!(reg.get(name).is_some(), "Missing expected schema: {name}");
        }
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn validate_valid_experience() {
        let reg = registry();
        assert!(reg.validate("experience", &valid_experience()).is_ok());
        assert!(
            reg.validate("experiences", &json!([valid_experience()]))
                .is_ok()
        );
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let mut invalid = valid_experience();
        invalid.as_object_mut().unwrap().remove("company");

        match registry().validate("experience", &invalid) {
            Err(SchemaError::ValidationFailed { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "company");
                assert_eq!(errors[0].code, ErrorKind::Required);
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn list_errors_are_indexed() {
        let mut second = valid_experience();
        second["achievements"] = json!([]);
        let result = registry().validate("experiences", &json!([valid_experience(), second]));
        let Err(SchemaError::ValidationFailed { errors }) = result else {
            panic!("Expected ValidationFailed");
        };
        assert_eq!(errors[0].field, "1.achievements");
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn register_adds_external_schema() {
        #[derive(schemars::JsonSchema)]
        #[allow(dead_code)]
        struct Ping {
            #[schemars(length(min = 1))]
            message: String,
        }

        let mut reg = registry();
        reg.register::<Ping>("ping");
        assert_eq!(reg.schema_count(), 10);
        assert!(reg.validate("ping", &json!({ "message": "hi" })).is_ok());
        assert!(reg.validate("ping", &json!({ "message": "" })).is_err());
    }
}
