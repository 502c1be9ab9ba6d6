use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read checksum manifest {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse checksum manifest {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
