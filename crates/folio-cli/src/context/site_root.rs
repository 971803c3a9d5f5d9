use std::path::{Path, PathBuf};

const SITE_MARKER: &str = ".folio";
const PROFILE_FILE: &str = "profile.json";

/// Directory a relative content root is resolved against.
///
/// The nearest ancestor of `start` holding a `.folio/` directory wins. Sites
/// without one are recognized by `<content_root>/profile.json`.
#[must_use]
pub fn find_site_root(start: &Path, content_root: &Path) -> Option<PathBuf> {
    nearest_ancestor(start, |dir| dir.join(SITE_MARKER).is_dir()).or_else(|| {
        nearest_ancestor(start, |dir| {
            dir.join(content_root).join(PROFILE_FILE).is_file()
        })
    })
}

fn nearest_ancestor(start: &Path, is_root: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_root(dir))
        .map(Path::to_path_buf)
}
