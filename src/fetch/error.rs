use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Server returned {status} for {url}")]
    Http { url: String, status: StatusCode },

    #[error("Cannot determine size of the file from URL: {0}")]
    UnknownSize(String),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to write downloaded bytes: {0}")]
    Io(#[from] std::io::Error),
}
