// src/source/mod.rs
mod fetch;
mod loader;

pub use loader::{LoadMessage, SampleLoader};

use std::path::PathBuf;
use std::time::Duration;

use crate::config::SourceConfig;
use crate::error::LoadError;
use crate::samples::{builtin_samples, Sample};

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Builtin,
    Remote { url: String, timeout: Option<Duration> },
    File { path: PathBuf },
}

impl DataSource {
    pub async fn load(&self, client: &reqwest::Client) -> Result<Vec<Sample>, LoadError> {
        match self {
            DataSource::Builtin => Ok(builtin_samples()),
            DataSource::Remote { url, timeout } => fetch::fetch_samples(client, url, *timeout).await,
            DataSource::File { path } => fetch::read_samples(path).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Builtin => "built-in table".to_string(),
            DataSource::Remote { url, .. } => url.clone(),
            DataSource::File { path } => path.display().to_string(),
        }
    }
}

impl From<&SourceConfig> for DataSource {
    fn from(config: &SourceConfig) -> Self {
        match config {
            SourceConfig::Builtin => DataSource::Builtin,
            SourceConfig::Remote { url, timeout_secs } => DataSource::Remote {
                url: url.clone(),
                timeout: timeout_secs.map(Duration::from_secs),
            },
            SourceConfig::File { path } => DataSource::File { path: path.clone() },
        }
    }
}
