pub mod error;

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info};

use self::error::WorkflowError;
use crate::catalog::{Catalog, DeviceModel, Side};
use crate::checksum::sha256_file;
use crate::config::Config;
use crate::fetch::{Fetcher, TransferProgress};
use crate::manifest::ChecksumManifest;
use crate::paths;
use crate::verify::{self, ComparisonResult};

/// A validated model/version choice made by the caller.
#[derive(Debug, Clone)]
pub struct Selection {
    pub model_id: String,
    pub version_id: String,
}

/// Where the two artifacts of a selection live, remotely and locally.
#[derive(Debug, Clone)]
pub struct ArtifactPair {
    pub left_url: String,
    pub right_url: String,
    pub left_path: PathBuf,
    pub right_path: PathBuf,
}

impl ArtifactPair {
    /// True only when BOTH images are on disk. A lone file (for example one
    /// left behind by an interrupted transfer of the other side) does not
    /// count as complete.
    pub fn is_complete(&self) -> bool {
        self.left_path.is_file() && self.right_path.is_file()
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub model_name: String,
    pub version: String,
    /// False when the pair was already on disk and the download was skipped.
    pub downloaded: bool,
    pub comparison: ComparisonResult,
}

pub struct Workflow<'a> {
    catalog: &'a Catalog,
    manifest: &'a ChecksumManifest,
    fetcher: Fetcher,
    config: &'a Config,
}

impl<'a> Workflow<'a> {
    pub fn new(
        catalog: &'a Catalog,
        manifest: &'a ChecksumManifest,
        fetcher: Fetcher,
        config: &'a Config,
    ) -> Self {
        Self {
            catalog,
            manifest,
            fetcher,
            config,
        }
    }

    pub fn artifact_pair(
        &self,
        model: &DeviceModel,
        version: &str,
    ) -> Result<ArtifactPair, WorkflowError> {
        let left_url = model.artifact_url(version, Side::Left);
        let right_url = model.artifact_url(version, Side::Right);
        let dir = paths::artifact_dir(self.config.download_root(), model, version);
        let left_path = dir.join(paths::file_name_for(&left_url)?);
        let right_path = dir.join(paths::file_name_for(&right_url)?);

        Ok(ArtifactPair {
            left_url,
            right_url,
            left_path,
            right_path,
        })
    }

    /// Runs the full workflow for one selection: resolve, short-circuit if
    /// the pair is already on disk, otherwise download left then right,
    /// then digest and compare. A failure on either side aborts the run
    /// before any verification.
    pub async fn run<F>(
        &self,
        selection: &Selection,
        mut on_progress: F,
    ) -> Result<RunReport, WorkflowError>
    where
        F: FnMut(Side, TransferProgress),
    {
        let model = self.catalog.resolve(&selection.model_id)?;
        let version = model.version(&selection.version_id)?;
        let pair = self.artifact_pair(model, &version.id)?;

        let downloaded = if pair.is_complete() {
            info!(
                "{} version {} is already downloaded, verifying existing files",
                model.display_name, version.id
            );
            false
        } else {
            self.download_pair(&pair, &mut on_progress).await?;
            true
        };

        let comparison = self.verify_pair(model, &version.id, &pair).await?;
        Ok(RunReport {
            model_name: model.display_name.clone(),
            version: version.id.clone(),
            downloaded,
            comparison,
        })
    }

    /// Verifies an already-downloaded pair without touching the network.
    pub async fn verify_existing(&self, selection: &Selection) -> Result<RunReport, WorkflowError> {
        let model = self.catalog.resolve(&selection.model_id)?;
        let version = model.version(&selection.version_id)?;
        let pair = self.artifact_pair(model, &version.id)?;

        if !pair.is_complete() {
            return Err(WorkflowError::NotDownloaded {
                model: model.display_name.clone(),
                version: version.id.clone(),
            });
        }

        let comparison = self.verify_pair(model, &version.id, &pair).await?;
        Ok(RunReport {
            model_name: model.display_name.clone(),
            version: version.id.clone(),
            downloaded: false,
            comparison,
        })
    }

    async fn download_pair<F>(
        &self,
        pair: &ArtifactPair,
        on_progress: &mut F,
    ) -> Result<(), WorkflowError>
    where
        F: FnMut(Side, TransferProgress),
    {
        if let Some(dir) = pair.left_path.parent() {
            fs::create_dir_all(dir).await?;
        }

        // Strictly sequential: left first, then right. The first failure
        // aborts the pair.
        for (side, url, path) in [
            (Side::Left, &pair.left_url, &pair.left_path),
            (Side::Right, &pair.right_url, &pair.right_path),
        ] {
            debug!("Downloading {} image to {}", side, path.display());
            self.fetcher
                .fetch(url, path, |progress| on_progress(side, progress))
                .await
                .map_err(|source| WorkflowError::Fetch { side, source })?;
        }

        Ok(())
    }

    async fn verify_pair(
        &self,
        model: &DeviceModel,
        version: &str,
        pair: &ArtifactPair,
    ) -> Result<ComparisonResult, WorkflowError> {
        let left_checksum = sha256_file(&pair.left_path).await?;
        let right_checksum = sha256_file(&pair.right_path).await?;

        Ok(verify::compare(
            &model.display_name,
            version,
            left_checksum,
            right_checksum,
            self.manifest,
        ))
    }
}
