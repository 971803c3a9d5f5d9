//! Entity structs for every folio content source.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field
//! constraints live in `#[schemars(...)]` attributes so that the generated
//! schema, not hand-written checks, decides what a valid record is.

mod case_study;
mod certification;
mod experience;
mod profile;
mod project;
mod skill;

pub use case_study::{CaseStudy, CaseStudyFrontmatter, REQUIRED_FRONTMATTER_KEYS};
pub use certification::Certification;
pub use experience::Experience;
pub use profile::{ProfileData, ProfileLinks};
pub use project::{ImageAsset, Project, ProjectLinks, ProjectMetric};
pub use skill::{Skill, SkillGroup};
