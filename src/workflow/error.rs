use thiserror::Error;

use crate::catalog::error::CatalogError;
use crate::catalog::Side;
use crate::fetch::error::FetchError;
use crate::manifest::error::ManifestError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to download the {side} image: {source}")]
    Fetch { side: Side, source: FetchError },

    #[error(transparent)]
    Client(#[from] FetchError),

    #[error("Firmware for {model} version {version} has not been downloaded yet")]
    NotDownloaded { model: String, version: String },

    #[error("Invalid artifact URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Local I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
