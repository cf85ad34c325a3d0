//! Utility functions module
//!
//! Contains helpers for formatting countdown values.

pub mod format;

// Re-export commonly used functions
pub use format::{format_clock, format_minutes, mask};
