use clap::Parser;
use std::io::Write;
use study_timer::app::Controller;
use study_timer::config::{Cli, TimerConfig};
use study_timer::StudyTimerError;

#[test]
fn test_config_file_drives_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_minutes = 25\ntick_interval_ms = 500").unwrap();

    let config = TimerConfig::load_from(file.path()).unwrap();
    let controller = Controller::new(config);
    assert_eq!(controller.session().time_left(), 1500);
    assert_eq!(controller.countdown().remaining(), 1500);
    assert_eq!(controller.adjuster().minutes(), 25);
}

#[test]
fn test_invalid_config_reports_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "refresh_rate_ms = 5000").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let cli = Cli::try_parse_from(["study-timer", "--config", &path]).unwrap();
    let err = cli.resolve_config().unwrap_err();
    assert!(matches!(err, StudyTimerError::ConfigError(_)));
}
