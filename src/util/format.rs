//! Countdown formatting helpers

/// Format seconds as a zero-padded `MM:SS` clock.
///
/// Minutes are not wrapped into hours, so long sessions show `120:00`.
///
/// # Examples
/// ```
/// use study_timer::util::format::format_clock;
///
/// assert_eq!(format_clock(600), "10:00");
/// assert_eq!(format_clock(59), "00:59");
/// ```
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format the SetTime value
///
/// # Examples
/// ```
/// use study_timer::util::format::format_minutes;
///
/// assert_eq!(format_minutes(10), "10 min");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// Replace every character with `*` for password display
pub fn mask(text: &str) -> String {
    "*".repeat(text.chars().count())
}
