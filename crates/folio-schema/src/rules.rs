//! Domain rules that run after a value has passed its schema.

use folio_core::entities::{
    CaseStudyFrontmatter, Certification, Experience, ProfileData, Project, SkillGroup,
};
use serde_json::Value;

use crate::checks::validate_url;
use crate::types::ValidationError;

/// Checks a JSON Schema cannot express for a decoded value.
///
/// Errors use the same dot paths as schema errors, relative to the value.
pub trait ContentRules {
    fn check_rules(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

impl<T: ContentRules> ContentRules for Vec<T> {
    fn check_rules(&self) -> Vec<ValidationError> {
        self.iter()
            .enumerate()
            .flat_map(|(idx, item)| {
                let prefix = idx.to_string();
                item.check_rules()
                    .into_iter()
                    .map(move |error| error.nested_under(&prefix))
            })
            .collect()
    }
}

/// Extra profile links are open-ended, but each must still be a URL.
impl ContentRules for ProfileData {
    fn check_rules(&self) -> Vec<ValidationError> {
        self.links
            .extra
            .iter()
            .filter_map(|(name, url)| validate_url(url, &format!("links.{name}")).err())
            .flatten()
            .collect()
    }
}

impl ContentRules for SkillGroup {}
impl ContentRules for Project {}
impl ContentRules for Certification {}
impl ContentRules for Experience {}
impl ContentRules for CaseStudyFrontmatter {}
impl ContentRules for Value {}
