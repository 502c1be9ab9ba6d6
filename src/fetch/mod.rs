pub mod error;

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use self::error::FetchError;
use crate::consts::USER_AGENT;

/// Progress of a single transfer, reported once per received chunk.
#[derive(Debug, Clone, Copy)]
pub struct TransferProgress {
    pub bytes_downloaded: u64,
    pub total_bytes: u64,
}

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Streams `url` to `dest`, reporting progress per chunk. A response
    /// without a positive Content-Length is refused before the destination
    /// file is created: without a size bound the transfer cannot be checked
    /// for completeness.
    pub async fn fetch<F>(
        &self,
        url: &str,
        dest: &Path,
        mut on_progress: F,
    ) -> Result<(), FetchError>
    where
        F: FnMut(TransferProgress),
    {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }

        let total_bytes = match response.content_length() {
            Some(len) if len > 0 => len,
            _ => return Err(FetchError::UnknownSize(url.to_string())),
        };

        let mut file = File::create(dest).await?;
        let mut bytes_downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            bytes_downloaded += chunk.len() as u64;
            on_progress(TransferProgress {
                bytes_downloaded,
                total_bytes,
            });
        }

        file.flush().await?;
        debug!("Wrote {} bytes to {}", bytes_downloaded, dest.display());
        Ok(())
    }
}
