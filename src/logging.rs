//! Tracing setup
//!
//! The TUI owns stdout, so events only go to a log file when one is given.

use crate::{Result, StudyTimerError};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the filter directive for this crate at the given level
pub fn filter_directive(level: &str) -> String {
    format!("study_timer={}", level)
}

/// Open (append) the log file, creating parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(StudyTimerError::from)
}

/// Install the global subscriber. Without a log file this is a no-op.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| StudyTimerError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "study_timer=debug");
    }

    #[test]
    fn test_init_without_file_is_noop() {
        assert!(init(None, "info").is_ok());
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("timer.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
