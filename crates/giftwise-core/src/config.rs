//! Configuration and knowledge-base file locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to the editable knowledge-base files.
///
/// Each file is optional on disk; missing files fall back to the
/// defaults compiled into `giftwise-kb`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbPaths {
    /// Root knowledge-base directory (e.g., `kb/`).
    pub root: PathBuf,
    /// Trait signal table (`kb/traits.json`).
    pub traits_file: PathBuf,
    /// Interest-category signal table (`kb/interests.json`).
    pub interests_file: PathBuf,
    /// Gift catalog (`kb/catalog.json`).
    pub catalog_file: PathBuf,
}

impl KbPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            traits_file: root.join("traits.json"),
            interests_file: root.join("interests.json"),
            catalog_file: root.join("catalog.json"),
            root,
        }
    }
}

/// Top-level GiftWise configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftwiseConfig {
    /// HTTP server port.
    pub port: u16,
    /// Knowledge-base file paths.
    pub kb_paths: KbPaths,
}

impl GiftwiseConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(kb_dir: impl AsRef<Path>) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3004);

        Self {
            port,
            kb_paths: KbPaths::new(kb_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kb_paths_join_root() {
        let paths = KbPaths::new("kb");
        assert_eq!(paths.traits_file, PathBuf::from("kb/traits.json"));
        assert_eq!(paths.catalog_file, PathBuf::from("kb/catalog.json"));
    }
}
