use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates;

/// A position held, newest first on the site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[schemars(length(min = 1))]
    pub company: String,
    #[schemars(length(min = 1))]
    pub role: String,
    #[schemars(length(min = 1))]
    pub start_date: String,
    /// Absent, or a "present" sentinel, for the current position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[schemars(length(min = 1))]
    pub location: String,
    #[schemars(length(min = 10))]
    pub description: String,
    #[schemars(length(min = 1), inner(length(min = 1)))]
    pub achievements: Vec<String>,
    #[serde(default)]
    #[schemars(inner(length(min = 1)))]
    pub tech: Vec<String>,
}

impl Experience {
    /// Whether this is an ongoing position.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.end_date
            .as_deref()
            .is_none_or(dates::is_present_sentinel)
    }

    #[must_use]
    pub fn started_on(&self) -> Option<chrono::NaiveDate> {
        dates::parse_content_date(&self.start_date)
    }
}
