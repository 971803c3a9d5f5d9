use std::path::{Path, PathBuf};

use anyhow::Context;
use folio_config::{ContentConfig, FolioConfig};
use folio_content::ContentLoader;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FolioConfig,
    pub loader: ContentLoader,
}

impl AppContext {
    /// Build the loader for the content root chosen by `--root` or config.
    ///
    /// A relative configured root is taken from the site root, falling back
    /// to `cwd`.
    pub fn init(config: FolioConfig, root_override: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let root = resolve_content_root(&config.content, root_override, cwd);
        tracing::debug!(root = %root.display(), "using content root");

        let content = ContentConfig {
            root,
            ..config.content.clone()
        };
        let loader = ContentLoader::from_config(&content)
            .context("failed to initialize content loader")?;

        Ok(Self { config, loader })
    }

    /// Default list size from `general.default_limit`.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

fn resolve_content_root(content: &ContentConfig, root_override: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(root) = root_override {
        return cwd.join(root);
    }
    if content.root.is_absolute() {
        return content.root.clone();
    }
    let base = super::find_site_root(cwd, &content.root).unwrap_or_else(|| cwd.to_path_buf());
    base.join(&content.root)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn override_wins_over_config() {
        let content = ContentConfig {
            root: PathBuf::from("/srv/content"),
            ..ContentConfig::default()
        };
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_content_root(&content, Some(Path::new("site/content")), cwd),
            PathBuf::from("/work/site/content")
        );
        assert_eq!(
            resolve_content_root(&content, None, cwd),
            PathBuf::from("/srv/content")
        );
    }

    #[test]
    fn relative_root_is_taken_from_site_root() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".folio")).expect(".folio should create");
        let nested = temp.path().join("app/src");
        std::fs::create_dir_all(&nested).expect("nested dirs should create");

        let root = resolve_content_root(&ContentConfig::default(), None, &nested);
        assert_eq!(root, temp.path().join("content"));
    }

    #[test]
    fn relative_root_falls_back_to_cwd() {
        let temp = TempDir::new().expect("tempdir should create");
        let root = resolve_content_root(&ContentConfig::default(), None, temp.path());
        assert_eq!(root, temp.path().join("content"));
    }
}
