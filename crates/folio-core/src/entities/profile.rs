use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The site owner's profile. Exactly one per content root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 1))]
    pub title: String,
    #[schemars(length(min = 1))]
    pub location: String,
    #[schemars(length(min = 10))]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub links: ProfileLinks,
}

/// Contact links on the profile.
///
/// The four named links are required. Any other key in the JSON object is
/// collected into `extra`; those values must be absolute URLs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileLinks {
    #[schemars(email)]
    pub email: String,
    #[schemars(url)]
    pub github: String,
    #[schemars(url)]
    pub linkedin: String,
    #[schemars(length(min = 1))]
    pub resume: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ProfileLinks {
    /// Look up a link by name, named fields first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "github" => Some(&self.github),
            "linkedin" => Some(&self.linkedin),
            "resume" => Some(&self.resume),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}
