//! syncview library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, one-shot rendering
//! - `client`: HTTP client for the sync log endpoint
//! - `models`: typed records received from the server
//! - `view`: HTML fragment builders
//! - `viewer`: fetch-and-render component writing to a display sink
//! - `util`: helpers for tracing setup and HTML escaping

pub mod app;
pub mod client;
pub mod models;
pub mod util;
pub mod view;
pub mod viewer;
