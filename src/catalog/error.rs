use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown model: {0}")]
    ModelNotFound(String),

    #[error("Version {version} is not available for {model}")]
    VersionNotFound { model: String, version: String },
}
