//! Study Timer
//!
//! A terminal study timer that walks the user through login, a countdown,
//! time adjustment, and a completion screen.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod session;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum StudyTimerError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Countdown task error
    TimerError(String),
}

impl fmt::Display for StudyTimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyTimerError::IoError(err) => write!(f, "I/O error: {}", err),
            StudyTimerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            StudyTimerError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            StudyTimerError::TimerError(msg) => write!(f, "Timer error: {}", msg),
        }
    }
}

impl std::error::Error for StudyTimerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudyTimerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StudyTimerError {
    fn from(err: std::io::Error) -> Self {
        StudyTimerError::IoError(err)
    }
}

impl From<toml::de::Error> for StudyTimerError {
    fn from(err: toml::de::Error) -> Self {
        StudyTimerError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<tokio::task::JoinError> for StudyTimerError {
    fn from(err: tokio::task::JoinError) -> Self {
        StudyTimerError::TimerError(format!("Ticker task failed: {}", err))
    }
}

/// Result type alias for study timer operations
pub type Result<T> = std::result::Result<T, StudyTimerError>;

/// Error handling utilities
pub mod error {
    use super::StudyTimerError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &StudyTimerError) -> String {
        match error {
            StudyTimerError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            StudyTimerError::TuiError(_) => {
                "The terminal could not be driven. Try a different terminal emulator.".to_string()
            }
            StudyTimerError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check the log file and config file permissions.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "study-timer";
pub const CONFIG_FILE: &str = "study-timer.toml";
/// Minutes used for the initial countdown and the SetTime screen
pub const DEFAULT_MINUTES: u32 = 10;
/// Lowest value the SetTime screen accepts
pub const MIN_MINUTES: u32 = 1;
/// Message shown once the countdown reaches zero
pub const COMPLETION_MESSAGE: &str = "Time's up! Well done!";

/// Greeting shown whenever the Timer screen is entered
pub fn greeting(username: &str) -> String {
    format!("Hello {}! Ready to study?", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_contains_username() {
        assert_eq!(greeting("ada"), "Hello ada! Ready to study?");
        assert_eq!(greeting(""), "Hello ! Ready to study?");
    }

    #[test]
    fn test_user_friendly_message() {
        let msg = error::user_friendly_message(&StudyTimerError::ConfigError("bad".into()));
        assert!(msg.contains("Check your settings"));

        let io = StudyTimerError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        assert!(error::user_friendly_message(&io).starts_with("Permission denied"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err = StudyTimerError::from(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert!(err.source().is_some());
        assert!(StudyTimerError::TimerError("x".into()).source().is_none());
    }
}
