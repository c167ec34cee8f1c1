//! Typed records used across layers.

pub mod log;
