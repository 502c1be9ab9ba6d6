pub mod error;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use self::error::ManifestError;

/// Known-good digests for one model/version. Either side may be absent; an
/// absent side degrades to the "unknown" match state instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpectedChecksums {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// `{ modelName: { versionId: { "left": hex, "right": hex } } }`, loaded once
/// at startup and read-only for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ChecksumManifest {
    entries: HashMap<String, HashMap<String, ExpectedChecksums>>,
}

impl ChecksumManifest {
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let manifest: Self =
            serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(
            "Loaded checksums for {} model(s) from {}",
            manifest.entries.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn expected(&self, model_name: &str, version: &str) -> Option<&ExpectedChecksums> {
        self.entries
            .get(model_name)
            .and_then(|versions| versions.get(version))
    }
}
