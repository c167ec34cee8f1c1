//! HTTP client for the sync log endpoint.

use crate::models::log::sync_log_entry::SyncLogEntry;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Failure modes for one fetch. The viewer collapses all of them into the
/// same user-visible placeholder; the distinction exists for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("server returned status {0}")]
  Status(StatusCode),
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("malformed response body: {0}")]
  Parse(#[source] serde_json::Error),
}

/// Client bound to one sync server.
#[derive(Debug, Clone)]
pub struct LogsClient {
  http: reqwest::Client,
  base_url: String,
}

impl LogsClient {
  pub fn new(base_url: &str) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  /// GET `{base_url}/nvd/api/logs` and decode the JSON array. An empty or
  /// `null` body decodes to an empty list.
  pub async fn fetch_logs(&self) -> Result<Vec<SyncLogEntry>, FetchError> {
    let url = format!("{}/nvd/api/logs", self.base_url);
    let res = self.http.get(&url).send().await?;
    if !res.status().is_success() {
      return Err(FetchError::Status(res.status()));
    }
    let body = res.text().await?;
    let logs = if body.trim().is_empty() {
      Vec::new()
    } else {
      serde_json::from_str::<Option<Vec<SyncLogEntry>>>(&body)
        .map_err(FetchError::Parse)?
        .unwrap_or_default()
    };
    debug!("received {} sync log entries from {url}", logs.len());
    Ok(logs)
  }
}
