//! Content tree location and loader skip policy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from("content")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding `profile.json`, `projects/`, `case-studies/`, etc.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Fail a collection load once more than this many files were skipped.
    /// `None` means no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_skipped: Option<usize>,

    /// Accept a collection in which every file failed validation.
    #[serde(default)]
    pub allow_all_invalid: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_skipped: None,
            allow_all_invalid: false,
        }
    }
}

impl ContentConfig {
    /// Whether `skipped` failures out of `total` files are acceptable.
    #[must_use]
    pub fn tolerates(&self, skipped: usize, total: usize) -> bool {
        if self.max_skipped.is_some_and(|limit| skipped > limit) {
            return false;
        }
        self.allow_all_invalid || total == 0 || skipped < total
    }
}
