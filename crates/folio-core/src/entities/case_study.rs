use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Project;
use crate::dates;

/// Front-matter keys a case study cannot be published without.
pub const REQUIRED_FRONTMATTER_KEYS: [&str; 6] =
    ["title", "project", "problem", "approach", "impact", "date"];

const WORDS_PER_MINUTE: usize = 200;

/// The metadata block at the top of a case-study document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudyFrontmatter {
    #[schemars(length(min = 1))]
    pub title: String,
    /// Slug of the project this case study belongs to.
    #[schemars(length(min = 1))]
    pub project: String,
    #[schemars(length(min = 1))]
    pub problem: String,
    #[schemars(length(min = 1))]
    pub approach: String,
    #[schemars(length(min = 1))]
    pub impact: String,
    #[schemars(length(min = 1))]
    pub date: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A loaded case study with its body and, when it resolves, its project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CaseStudy {
    pub slug: String,
    pub frontmatter: CaseStudyFrontmatter,
    pub content: String,
    pub reading_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

impl CaseStudy {
    #[must_use]
    pub fn new(
        slug: impl Into<String>,
        frontmatter: CaseStudyFrontmatter,
        content: impl Into<String>,
        project: Option<Project>,
    ) -> Self {
        let content = content.into();
        let reading_time_minutes = reading_time_minutes(&content);
        Self {
            slug: slug.into(),
            frontmatter,
            content,
            reading_time_minutes,
            project,
        }
    }

    #[must_use]
    pub fn published_on(&self) -> Option<chrono::NaiveDate> {
        dates::parse_content_date(&self.frontmatter.date)
    }
}

/// Estimated reading time at 200 words per minute, rounded up.
#[must_use]
pub fn reading_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE)).unwrap_or(u32::MAX)
}
