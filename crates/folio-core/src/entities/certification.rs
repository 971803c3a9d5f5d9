use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Certification {
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 1))]
    pub issuer: String,
    #[schemars(url)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Certification {
    /// Parsed issue date, if present and well-formed.
    #[must_use]
    pub fn issued_on(&self) -> Option<chrono::NaiveDate> {
        dates::sort_key(self.date.as_deref())
    }
}
