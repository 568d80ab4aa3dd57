use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::samples::{parse_samples, Sample};

/// Single GET, no retries. Any non-2xx status is an error.
pub(super) async fn fetch_samples(
    client: &reqwest::Client,
    url: &str,
    timeout: Option<Duration>,
) -> Result<Vec<Sample>, LoadError> {
    let mut request = client.get(url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let payload: Value = serde_json::from_slice(&body)?;
    let samples = parse_samples(&payload);

    info!("Fetched {} samples from {}", samples.len(), url);
    Ok(samples)
}

pub(super) async fn read_samples(path: &Path) -> Result<Vec<Sample>, LoadError> {
    let body = tokio::fs::read(path).await?;
    let payload: Value = serde_json::from_slice(&body)?;
    let samples = parse_samples(&payload);

    debug!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
