//! # folio-content
//!
//! Loads the portfolio's on-disk content into typed, validated, ordered
//! values.
//!
//! Layout under the content root:
//! - `profile.json`, `skills.json`, `experience.json`, `certifications.json`
//! - `projects/*.json`, one project per file
//! - `case-studies/<slug>.mdx`, Markdown with a YAML front-matter block
//!
//! Single-file sources fail loudly: any decode or validation problem is a
//! [`ContentError`]. The project collection skips bad files (logged at
//! `warn`) subject to the skip policy in [`folio_config::ContentConfig`].
//! Case study lookups return `None` instead of failing.
//! [`ContentLoader::validate_all_content`] checks the whole tree and never
//! stops at the first problem.

mod case_studies;
mod error;
pub mod frontmatter;
mod loader;
pub mod ordering;
mod report;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterError, split_front_matter};
pub use loader::ContentLoader;
pub use report::RECOMMENDED_PROJECT_FIELDS;
