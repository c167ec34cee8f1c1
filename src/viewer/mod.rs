//! Fetch-and-render component for the sync log report.
//!
//! Each `load_logs` call shows the loading indicator, fetches once, and
//! replaces the sink content with exactly one of the terminal states:
//! rendered report, empty placeholder, or error placeholder. A generation
//! counter makes the overlap behavior explicit: only the most recent
//! invocation may write its result, stale completions are dropped.

use crate::{client::LogsClient, view};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error};

/// Render target for the viewer. Each call replaces the whole content in one
/// atomic update.
pub trait DisplaySink: Send + Sync {
  fn replace(&self, html: String);
}

/// In-memory sink, used by the CLI and by tests.
impl DisplaySink for Mutex<String> {
  fn replace(&self, html: String) {
    if let Ok(mut slot) = self.lock() {
      *slot = html;
    }
  }
}

pub struct LogViewer<S: DisplaySink> {
  client: LogsClient,
  sink: S,
  generation: AtomicU64,
}

impl<S: DisplaySink> LogViewer<S> {
  pub fn new(client: LogsClient, sink: S) -> Self {
    Self {
      client,
      sink,
      generation: AtomicU64::new(0),
    }
  }

  pub fn sink(&self) -> &S {
    &self.sink
  }

  /// Fetch the sync logs and render them into the sink. Errors are never
  /// propagated: every failure renders the same generic placeholder.
  pub async fn load_logs(&self) {
    let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
    self.sink.replace(view::loading());

    let result = self.client.fetch_logs().await;
    if self.generation.load(Ordering::SeqCst) != generation {
      debug!("dropping sync log response superseded by a newer load");
      return;
    }
    match result {
      Ok(logs) if logs.is_empty() => self.sink.replace(view::empty()),
      Ok(logs) => {
        debug!("rendering {} sync log entries", logs.len());
        self.sink.replace(view::report(logs));
      }
      Err(e) => {
        error!("failed to fetch sync logs: {e}");
        self.sink.replace(view::error());
      }
    }
  }
}
