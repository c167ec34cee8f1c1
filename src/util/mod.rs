//! Utility functions: tracing setup and HTML escaping.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Minimal HTML escaping for text display.
pub fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
  use super::html_escape;

  #[test]
  fn escapes_markup_characters() {
    assert_eq!(
      html_escape("<b>a & b</b>"),
      "&lt;b&gt;a &amp; b&lt;/b&gt;"
    );
    assert_eq!(html_escape("2024-01-01 10:00:00"), "2024-01-01 10:00:00");
  }
}
