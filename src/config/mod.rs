//! Configuration management module
//!
//! Loads and validates the timer settings. The file is read-only: nothing
//! the user does in the app is written back.

use crate::{Result, StudyTimerError, APP_NAME, CONFIG_FILE, DEFAULT_MINUTES, MIN_MINUTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod cli;

pub use cli::Cli;

/// Timer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Minutes for the first countdown and the SetTime screen's starting value
    pub default_minutes: u32,
    /// Period between countdown ticks (milliseconds)
    pub tick_interval_ms: u64,
    /// How long the UI waits for input before redrawing (milliseconds)
    pub refresh_rate_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: DEFAULT_MINUTES,
            tick_interval_ms: 1000,
            refresh_rate_ms: 250, // 4 FPS for responsive UI
        }
    }
}

impl TimerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default minutes
    pub fn with_default_minutes(mut self, minutes: u32) -> Self {
        self.default_minutes = minutes;
        self
    }

    /// Override the tick period
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Default countdown length in seconds
    pub fn default_seconds(&self) -> u32 {
        self.default_minutes.saturating_mul(60)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn refresh_rate(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.default_minutes < MIN_MINUTES {
            return Err(StudyTimerError::ConfigError(format!(
                "Default minutes must be at least {}",
                MIN_MINUTES
            )));
        }

        const MAX_TICK_MS: u64 = 60_000;
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_MS {
            return Err(StudyTimerError::ConfigError(format!(
                "Tick interval must be between 1 and {} ms",
                MAX_TICK_MS
            )));
        }

        const MIN_REFRESH_MS: u64 = 10;
        const MAX_REFRESH_MS: u64 = 1000;
        if self.refresh_rate_ms < MIN_REFRESH_MS || self.refresh_rate_ms > MAX_REFRESH_MS {
            return Err(StudyTimerError::ConfigError(format!(
                "Refresh rate must be between {} and {} ms",
                MIN_REFRESH_MS, MAX_REFRESH_MS
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).map_err(|e| {
            StudyTimerError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            StudyTimerError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/study-timer/study-timer.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            StudyTimerError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
