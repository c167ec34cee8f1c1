//! Sync log entry received from the server API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// One completed synchronization action reported by the server. Entries are
/// read-only snapshots; they are fetched fresh on each load and discarded
/// once rendering completes.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncLogEntry {
    /// Raw timestamp string as sent by the server, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    pub action_type: ActionType,
    /// Number of records added by this sync action.
    pub count: u64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Trigger for a synchronization action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Auto,
    Manual,
    /// Any value other than `auto`/`manual`. Styled like a manual sync in
    /// the report but counted toward neither summary bucket.
    #[serde(other)]
    Unknown,
}

impl SyncLogEntry {
    /// Timestamp parsed for ordering. `None` when the server sent a string
    /// chrono cannot parse; such entries sort after all parsable ones.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        let s = self.timestamp.trim();
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    }

    /// Inclusive date range covered by the sync, only when both ends are set.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

impl ActionType {
    /// Badge label. Unknown values fall back to the manual label.
    pub fn label(self) -> &'static str {
        match self {
            ActionType::Auto => "auto sync",
            _ => "manual sync",
        }
    }

    /// Badge CSS class, following the same fallback as [`label`](Self::label).
    pub fn badge_class(self) -> &'static str {
        match self {
            ActionType::Auto => "badge-secondary",
            _ => "badge-primary",
        }
    }
}
