//! Case study documents: Markdown with a YAML front-matter block.

use std::path::Path;

use folio_core::entities::{CaseStudy, CaseStudyFrontmatter, Project, REQUIRED_FRONTMATTER_KEYS};
use folio_schema::{ErrorKind, ValidationError, validate_with_details};
use serde_json::Value;

use crate::error::ContentError;
use crate::frontmatter::split_front_matter;
use crate::loader::{ContentLoader, read_text};

/// A parsed case study file whose project has not been resolved yet.
#[derive(Debug, Clone)]
pub(crate) struct CaseStudyDocument {
    pub(crate) slug: String,
    pub(crate) frontmatter: CaseStudyFrontmatter,
    pub(crate) body: String,
}

impl CaseStudyDocument {
    pub(crate) fn into_case_study(self, project: Option<Project>) -> CaseStudy {
        CaseStudy::new(self.slug, self.frontmatter, self.body.trim(), project)
    }
}

impl ContentLoader {
    /// Read and validate one case study file.
    pub(crate) fn read_case_study(&self, path: &Path) -> Result<CaseStudyDocument, ContentError> {
        let text = read_text(path)?;
        let parsed = split_front_matter(&text).map_err(|error| ContentError::FrontMatter {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        let mut data = parsed.data;
        let missing = missing_required_keys(&data);
        if !missing.is_empty() {
            return Err(ContentError::Validation {
                path: path.to_path_buf(),
                errors: missing,
            });
        }

        scalars_as_text(&mut data);
        let frontmatter = validate_with_details(&data, &self.schemas.case_study).map_err(
            |errors| ContentError::Validation {
                path: path.to_path_buf(),
                errors,
            },
        )?;

        let slug = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(CaseStudyDocument {
            slug,
            frontmatter,
            body: parsed.body,
        })
    }
}

/// Required front-matter keys that are absent or hold an empty value.
fn missing_required_keys(data: &Value) -> Vec<ValidationError> {
    REQUIRED_FRONTMATTER_KEYS
        .iter()
        .filter(|key| is_blank(data.get(**key)))
        .map(|key| {
            ValidationError::new(
                *key,
                format!("Missing required field '{key}'"),
                ErrorKind::Required,
            )
        })
        .collect()
}

/// Read YAML numbers and booleans in text fields as their literal text, so
/// `date: 2024` or `impact: 40` load like their quoted forms.
fn scalars_as_text(data: &mut Value) {
    let Some(map) = data.as_object_mut() else {
        return;
    };
    for key in REQUIRED_FRONTMATTER_KEYS.iter().chain(&["description"]) {
        if let Some(value) = map.get_mut(*key) {
            scalar_as_text(value);
        }
    }
    if let Some(Value::Array(tags)) = map.get_mut("tags") {
        tags.iter_mut().for_each(scalar_as_text);
    }
}

fn scalar_as_text(value: &mut Value) {
    let text = match &*value {
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return,
    };
    *value = Value::String(text);
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
