use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates;

/// A showcased project. One JSON file per project under `projects/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Lowercase kebab-case identifier, unique across all projects.
    #[schemars(length(min = 1), regex(pattern = r"^[a-z0-9]+(-[a-z0-9]+)*$"))]
    pub slug: String,
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 10))]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(length(min = 1), inner(length(min = 1)))]
    pub tech: Vec<String>,
    pub links: ProjectLinks,
    #[schemars(length(min = 1), inner(length(min = 1)))]
    pub impact: Vec<String>,
    #[schemars(length(min = 1))]
    pub role: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<ProjectMetric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Project {
    #[must_use]
    pub fn started_on(&self) -> Option<chrono::NaiveDate> {
        dates::sort_key(self.start_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(url)]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1))]
    pub case_study: Option<String>,
}

/// A headline number. `value` is display text ("42%", "3x"), not a number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectMetric {
    #[schemars(length(min = 1))]
    pub label: String,
    #[schemars(length(min = 1))]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An image with mandatory alt text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImageAsset {
    #[schemars(length(min = 1))]
    pub src: String,
    #[schemars(length(min = 1))]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("exclusiveMinimum" = 0))]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
