//! HTML fragment builders for the sync log report.

use crate::models::log::sync_log_entry::{ActionType, SyncLogEntry};
use crate::util::html_escape;
use std::cmp::Reverse;
use std::fmt::Write;

/// Indicator shown while a fetch is in flight.
pub fn loading() -> String {
  r#"<div class="text-center text-muted">Loading logs...</div>"#.to_string()
}

/// Placeholder for an empty or absent log collection.
pub fn empty() -> String {
  r#"<div class="text-center text-muted py-4">No sync logs yet</div>"#.to_string()
}

/// Generic failure placeholder. Every error kind renders the same message.
pub fn error() -> String {
  r#"<div class="text-center text-danger py-4">Failed to fetch logs, please retry later</div>"#
    .to_string()
}

/// Order entries most recent first. The sort is stable, so entries with
/// equal timestamps keep their input order; entries whose timestamp does not
/// parse go after all parsable ones, also in input order.
pub fn sort_for_display(logs: &mut [SyncLogEntry]) {
  logs.sort_by_cached_key(|log| {
    let ts = log.parsed_timestamp();
    (ts.is_none(), Reverse(ts))
  });
}

/// Build the report fragment: a summary line, then one block per entry in
/// display order.
pub fn report(mut logs: Vec<SyncLogEntry>) -> String {
  let auto = logs
    .iter()
    .filter(|l| l.action_type == ActionType::Auto)
    .count();
  let manual = logs
    .iter()
    .filter(|l| l.action_type == ActionType::Manual)
    .count();

  let mut html = format!(
    r#"<div class="mb-4 text-sm text-gray-500">{} logs total (auto sync: {}, manual sync: {})</div>"#,
    logs.len(),
    auto,
    manual
  );
  html.push_str(r#"<ul class="list-unstyled">"#);

  sort_for_display(&mut logs);
  for log in &logs {
    html.push_str(r#"<li class="p-3 bg-light rounded border mb-3 shadow-sm">"#);
    let _ = write!(
      html,
      r#"<div class="text-sm text-gray-500 mb-2">{}</div>"#,
      html_escape(&log.timestamp)
    );
    html.push_str(r#"<div class="d-flex flex-wrap align-items-center gap-2">"#);
    let _ = write!(
      html,
      r#"<span class="badge {} px-2 py-1">{}</span>"#,
      log.action_type.badge_class(),
      log.action_type.label()
    );
    let _ = write!(
      html,
      r#"<span class="text-gray-800">completed, added <span class="font-bold text-primary">{}</span> records</span>"#,
      log.count
    );
    if let Some((start, end)) = log.date_range() {
      let _ = write!(
        html,
        r#" <small class="text-muted">(</small><small class="text-info">{}</small> <small class="text-muted">to</small> <small class="text-info">{}</small><small class="text-muted">)</small>"#,
        html_escape(start),
        html_escape(end)
      );
    }
    html.push_str("</div></li>");
  }
  html.push_str("</ul>");
  html
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(timestamp: &str, action_type: ActionType, count: u64) -> SyncLogEntry {
    SyncLogEntry {
      timestamp: timestamp.to_string(),
      action_type,
      count,
      start_date: None,
      end_date: None,
    }
  }

  #[test]
  fn sorts_most_recent_first() {
    let mut logs = vec![
      entry("2024-01-01", ActionType::Auto, 1),
      entry("2024-03-01", ActionType::Auto, 2),
      entry("2024-02-01", ActionType::Auto, 3),
    ];
    sort_for_display(&mut logs);
    let order: Vec<&str> = logs.iter().map(|l| l.timestamp.as_str()).collect();
    assert_eq!(order, ["2024-03-01", "2024-02-01", "2024-01-01"]);
  }

  #[test]
  fn unparsable_timestamps_go_last_in_input_order() {
    let mut logs = vec![
      entry("garbage-a", ActionType::Auto, 1),
      entry("2024-02-01", ActionType::Auto, 2),
      entry("garbage-b", ActionType::Auto, 3),
      entry("2024-03-01", ActionType::Auto, 4),
    ];
    sort_for_display(&mut logs);
    let order: Vec<&str> = logs.iter().map(|l| l.timestamp.as_str()).collect();
    assert_eq!(order, ["2024-03-01", "2024-02-01", "garbage-a", "garbage-b"]);
  }

  #[test]
  fn summary_counts_only_known_action_types() {
    let logs = vec![
      entry("2024-01-01 10:00:00", ActionType::Auto, 1),
      entry("2024-01-02 10:00:00", ActionType::Manual, 2),
      entry("2024-01-03 10:00:00", ActionType::Unknown, 3),
    ];
    let html = report(logs);
    // Unknown entries appear in the total and the list but in neither bucket.
    assert!(html.contains("3 logs total (auto sync: 1, manual sync: 1)"));
    assert_eq!(html.matches("<li ").count(), 3);
  }

  #[test]
  fn unknown_action_renders_with_manual_badge() {
    let html = report(vec![entry("2024-01-01 10:00:00", ActionType::Unknown, 5)]);
    assert!(html.contains(r#"badge badge-primary"#));
    assert!(html.contains("manual sync"));
    assert!(!html.contains("auto sync: 1"));
  }

  #[test]
  fn date_range_renders_only_when_both_dates_present() {
    let mut with_range = entry("2024-02-01 10:00:00", ActionType::Auto, 7);
    with_range.start_date = Some("2024-01-01".to_string());
    with_range.end_date = Some("2024-01-31".to_string());
    let mut start_only = entry("2024-01-01 10:00:00", ActionType::Auto, 7);
    start_only.start_date = Some("2024-01-01".to_string());

    let html = report(vec![with_range, start_only]);
    assert!(html.contains("2024-01-31"));
    assert_eq!(html.matches("text-info").count(), 2);
  }

  #[test]
  fn entry_text_is_escaped() {
    let html = report(vec![entry("<script>", ActionType::Manual, 1)]);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
  }
}
