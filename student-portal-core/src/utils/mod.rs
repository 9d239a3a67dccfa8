//! Utility modules.

/// Display helpers for server timestamps.
pub mod datetime;

/// Keeps response bodies from flooding the log.
pub mod log_sanitizer;
