use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};

use crate::consts::HASH_CHUNK_SIZE;

/// SHA-256 of a file's contents as lowercase hex, folded in fixed-size
/// chunks so firmware images of any size hash in constant memory.
pub async fn sha256_file(path: impl AsRef<Path>) -> Result<String, std::io::Error> {
    let file = File::open(path).await?;
    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; HASH_CHUNK_SIZE];
    let mut hasher = Sha256::new();

    loop {
        let bytes_read = reader.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_file_yields_the_empty_input_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        tokio::fs::write(&path, b"").await.unwrap();

        assert_eq!(
            sha256_file(&path).await.unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn known_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.bin");
        tokio::fs::write(&path, b"abc").await.unwrap();

        assert_eq!(
            sha256_file(&path).await.unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn digest_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.bin");
        tokio::fs::write(&path, vec![0xA5u8; 10_000]).await.unwrap();

        let first = sha256_file(&path).await.unwrap();
        let second = sha256_file(&path).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sha256_file(dir.path().join("missing.bin")).await.is_err());
    }
}
