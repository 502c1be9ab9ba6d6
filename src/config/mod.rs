use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MANIFEST_FILE;

/// Where firmware lands and where the checksum manifest is read from. Built
/// once at startup; the core never touches process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    download_root: PathBuf,
    manifest_path: PathBuf,
}

impl Config {
    pub fn new(output: Option<PathBuf>, manifest: Option<PathBuf>) -> Result<Self> {
        let download_root = match output {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let manifest_path = manifest.unwrap_or_else(|| download_root.join(DEFAULT_MANIFEST_FILE));

        Ok(Self {
            download_root,
            manifest_path,
        })
    }

    pub fn new_with_root(root: PathBuf) -> Self {
        Self {
            manifest_path: root.join(DEFAULT_MANIFEST_FILE),
            download_root: root,
        }
    }

    // Getters
    pub fn download_root(&self) -> &Path {
        &self.download_root
    }
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_put_the_manifest_under_the_root() {
        let config = Config::new_with_root(PathBuf::from("/downloads"));
        assert_eq!(config.download_root(), Path::new("/downloads"));
        assert_eq!(
            config.manifest_path(),
            Path::new("/downloads/checksums.json")
        );
    }

    #[test]
    fn explicit_manifest_path_wins() {
        let config = Config::new(
            Some(PathBuf::from("/downloads")),
            Some(PathBuf::from("/etc/fota/checksums.json")),
        )
        .unwrap();
        assert_eq!(
            config.manifest_path(),
            Path::new("/etc/fota/checksums.json")
        );
    }
}
