use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::shared::config::CloudConfig;
use crate::storage::domain::object_store::{ObjectStore, StorageError};

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Object store collaborator reached over plain HTTP: objects live at
/// `{endpoint}/{bucket}/{key}` and are written with a PUT.
pub struct HttpObjectStore {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    bucket: String,
}

impl HttpObjectStore {
    pub fn new(config: &CloudConfig) -> Result<Self, StorageError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.storage_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            bucket: config.bucket.clone(),
        })
    }

    fn object_uri(&self, key: &str) -> String {
        format!("{}/{}/{key}", self.endpoint, self.bucket)
    }
}

impl ObjectStore for HttpObjectStore {
    fn put(&self, file: &Path, key: &str) -> Result<String, StorageError> {
        let body = fs::read(file).map_err(|e| StorageError::Io {
            path: file.to_path_buf(),
            source: e,
        })?;

        let uri = self.object_uri(key);
        log::debug!("uploading {} ({} bytes) to {uri}", file.display(), body.len());
        let response = self
            .http
            .put(&uri)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::UnexpectedStatus {
                status: status.as_u16(),
                key: key.to_string(),
            });
        }
        Ok(uri)
    }
}
