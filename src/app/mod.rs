//! Application setup: configuration and one-shot rendering.

use crate::{client::LogsClient, util, viewer::LogViewer};
use std::sync::Mutex;
use tracing::info;

/// Load the sync logs once from the configured server and print the rendered
/// HTML fragment to stdout.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  util::init_tracing();

  let endpoint =
    std::env::var("SYNCVIEW_ENDPOINT").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
  info!("fetching sync logs from {endpoint}/nvd/api/logs");

  let viewer = LogViewer::new(LogsClient::new(&endpoint), Mutex::new(String::new()));
  viewer.load_logs().await;

  let html = viewer
    .sink()
    .lock()
    .map(|slot| slot.clone())
    .unwrap_or_default();
  println!("{html}");
  Ok(())
}
