use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("upload failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status} uploading {key}")]
    UnexpectedStatus { status: u16, key: String },
}

/// Domain interface for the cloud object store.
pub trait ObjectStore: Send {
    /// Upload a local file under `key` in the configured bucket and return
    /// the stored object's URI, which downstream jobs address it by.
    fn put(&self, file: &Path, key: &str) -> Result<String, StorageError>;
}
