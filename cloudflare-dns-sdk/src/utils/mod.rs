//! Utility modules.

/// Timestamp (de)serialization for API records.
pub mod datetime;

/// Truncation and masking for log output.
pub mod log_sanitizer;
