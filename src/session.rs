//! Session state
//!
//! Values that live for the whole foreground session: who logged in and
//! how long the countdown should be.

/// Per-process session values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    /// Configured countdown length in seconds
    time_left: u32,
}

impl Session {
    pub fn new(time_left: u32) -> Self {
        Self {
            username: String::new(),
            time_left,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Record the name entered at login. Any text is accepted as-is.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn set_time_left(&mut self, seconds: u32) {
        self.time_left = seconds;
    }
}
