//! Field-level validation errors shared by every folio validator.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name used when a failure applies to the whole value.
pub const ROOT_FIELD: &str = "root";

/// Result of validating a value: the typed value, or every error found.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidType,
    TooSmall,
    TooBig,
    InvalidString,
    InvalidFormat,
    InvalidEnumValue,
    UnrecognizedKeys,
    InvalidUrl,
    InvalidEmail,
    InvalidDate,
    MissingRecommended,
    DuplicateSlug,
    UnresolvedReference,
    InvalidJson,
    InvalidFrontMatter,
    IoError,
    Custom,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidType => "invalid_type",
            Self::TooSmall => "too_small",
            Self::TooBig => "too_big",
            Self::InvalidString => "invalid_string",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::UnrecognizedKeys => "unrecognized_keys",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidDate => "invalid_date",
            Self::MissingRecommended => "missing_recommended",
            Self::DuplicateSlug => "duplicate_slug",
            Self::UnresolvedReference => "unresolved_reference",
            Self::InvalidJson => "invalid_json",
            Self::InvalidFrontMatter => "invalid_front_matter",
            Self::IoError => "io_error",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem with one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dot-joined path to the field (`images.0.alt`), or [`ROOT_FIELD`].
    pub field: String,
    pub message: String,
    pub code: ErrorKind,
    /// The offending input at `field`, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorKind) -> Self {
        let field = field.into();
        Self {
            field: if field.is_empty() {
                ROOT_FIELD.to_string()
            } else {
                field
            },
            message: message.into(),
            code,
            value: None,
        }
    }

    /// Error that applies to the whole value rather than one field.
    #[must_use]
    pub fn root(message: impl Into<String>, code: ErrorKind) -> Self {
        Self::new(ROOT_FIELD, message, code)
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Prefix the field path, e.g. to place an item error inside its list.
    #[must_use]
    pub fn nested_under(mut self, prefix: &str) -> Self {
        self.field = if self.field == ROOT_FIELD {
            prefix.to_string()
        } else {
            format!("{prefix}.{}", self.field)
        };
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " (received: {value})")?;
        }
        Ok(())
    }
}

/// Convert a JSON Pointer (`/images/0/alt`) into a dot path (`images.0.alt`).
pub(crate) fn pointer_to_field(pointer: &str) -> String {
    pointer
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Resolve a dot path against a JSON value.
pub(crate) fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    })
}
