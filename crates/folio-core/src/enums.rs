//! Content source kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SourceLayout
// ---------------------------------------------------------------------------

/// How a content kind is laid out under the content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLayout {
    /// One JSON file holding the whole value.
    SingleFile(&'static str),
    /// A directory with one JSON file per record.
    JsonDirectory(&'static str),
    /// A directory of Markdown files with a front-matter block.
    MarkdownDirectory(&'static str),
}

impl SourceLayout {
    /// Path of the file or directory relative to the content root.
    #[must_use]
    pub const fn relative_path(self) -> &'static str {
        match self {
            Self::SingleFile(path) | Self::JsonDirectory(path) | Self::MarkdownDirectory(path) => {
                path
            }
        }
    }

    /// File extension of the records inside a directory source.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::SingleFile(_) | Self::JsonDirectory(_) => "json",
            Self::MarkdownDirectory(_) => "mdx",
        }
    }
}

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// A named content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Profile,
    Skills,
    Projects,
    Experience,
    Certifications,
    CaseStudies,
}

impl ContentKind {
    /// Every kind, in the order the validation report walks them.
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Skills,
        Self::Experience,
        Self::Certifications,
        Self::Projects,
        Self::CaseStudies,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
            Self::CaseStudies => "case_studies",
        }
    }

    /// Where this kind lives under the content root.
    #[must_use]
    pub const fn layout(self) -> SourceLayout {
        match self {
            Self::Profile => SourceLayout::SingleFile("profile.json"),
            Self::Skills => SourceLayout::SingleFile("skills.json"),
            Self::Experience => SourceLayout::SingleFile("experience.json"),
            Self::Certifications => SourceLayout::SingleFile("certifications.json"),
            Self::Projects => SourceLayout::JsonDirectory("projects"),
            Self::CaseStudies => SourceLayout::MarkdownDirectory("case-studies"),
        }
    }

    /// Single-file sources break the build when they fail to load.
    #[must_use]
    pub const fn is_single_file(self) -> bool {
        matches!(self.layout(), SourceLayout::SingleFile(_))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "profile" => Ok(Self::Profile),
            "skills" => Ok(Self::Skills),
            "projects" => Ok(Self::Projects),
            "experience" => Ok(Self::Experience),
            "certifications" => Ok(Self::Certifications),
            "case_studies" => Ok(Self::CaseStudies),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}
