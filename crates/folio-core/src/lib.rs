//! # folio-core
//!
//! Content entity types, date helpers, and error types for folio.
//!
//! This crate provides the foundational types shared across all folio crates:
//! - Entity structs for every content source (profile, skills, projects,
//!   experience, certifications, case studies)
//! - The [`ContentKind`] enum naming each source and its on-disk location
//! - Date parsing used for ordering and ISO 8601 checks
//! - Cross-cutting error types
//!
//! Every entity derives `JsonSchema` with its validation constraints expressed
//! as schemars attributes, so the generated JSON Schema is the one declarative
//! description of each shape.

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;

/// Pattern every project and case-study slug must match: lowercase
/// alphanumeric runs joined by single hyphens.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";
