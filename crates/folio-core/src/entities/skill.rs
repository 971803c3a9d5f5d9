use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single skill inside a group.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Skill {
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 1))]
    pub category: String,
    /// Self-assessed level, 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1.0, max = 10.0))]
    pub proficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0))]
    pub years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named group of skills, e.g. "Languages" or "Cloud".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SkillGroup {
    #[schemars(length(min = 1))]
    pub group: String,
    #[schemars(length(min = 1))]
    pub items: Vec<Skill>,
    /// Explicit position. Groups without one follow, ordered by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}
