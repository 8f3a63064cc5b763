use std::env;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Credentials and endpoints for the cloud collaborators.
///
/// Passed into each collaborator at construction time; nothing reads
/// process-wide state after startup.
#[derive(Clone, Debug)]
pub struct CloudConfig {
    pub storage_endpoint: String,
    pub transcribe_endpoint: String,
    pub api_key: String,
    pub bucket: String,
}

impl CloudConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            storage_endpoint: require("SERMONTRIM_STORAGE_ENDPOINT")?,
            transcribe_endpoint: require("SERMONTRIM_TRANSCRIBE_ENDPOINT")?,
            api_key: require("SERMONTRIM_API_KEY")?,
            bucket: require("SERMONTRIM_BUCKET")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
