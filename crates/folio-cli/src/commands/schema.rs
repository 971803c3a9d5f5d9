use std::path::Path;

use anyhow::Context;
use folio_core::errors::CoreError;
use folio_schema::{SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::outcome::{CheckOutcome, report};
use crate::output::output;

/// Every schema folio knows, content and contact form alike.
#[must_use]
pub fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    folio_contact::register_schemas(&mut registry);
    registry
}

/// Handle `folio schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = registry();

    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    if let Some(path) = &args.check {
        return check_file(&registry, name, path, flags);
    }

    let schema = registry.get(name).ok_or_else(|| CoreError::NotFound {
        kind: "schema".to_string(),
        id: name.to_string(),
    })?;
    output(schema, flags.format)
}

fn check_file(
    registry: &SchemaRegistry,
    name: &str,
    path: &Path,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let outcome = match registry.validate(name, &value) {
        Ok(()) => CheckOutcome::passed(None),
        Err(SchemaError::ValidationFailed { errors }) => CheckOutcome::failed(errors),
        Err(error) => return Err(error.into()),
    };
    report(&outcome, flags.format)
}

#[cfg(test)]
mod tests {
    use super::registry;

    #[test]
    fn registry_includes_contact_form() {
        let registry = registry();
        assert_eq!(registry.schema_count(), 10);
        assert!(registry.list().contains(&"contact_form"));
    }
}
