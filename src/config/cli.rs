//! Command line argument handling

use super::TimerConfig;
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "study-timer")]
#[command(about = "A terminal study timer")]
#[command(version)]
pub struct Cli {
    /// Read settings from this TOML file instead of the standard location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting countdown length in minutes
    #[arg(short, long)]
    pub minutes: Option<u32>,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Load the config file and apply command line overrides
    pub fn resolve_config(&self) -> Result<TimerConfig> {
        let mut config = match &self.config {
            Some(path) => TimerConfig::load_from(path)?,
            None => TimerConfig::load()?,
        };

        if let Some(minutes) = self.minutes {
            config.default_minutes = minutes;
        }

        config.validate()?;
        Ok(config)
    }
}
