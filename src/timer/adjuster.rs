//! Minute adjuster behind the SetTime screen

use crate::MIN_MINUTES;

/// Minute counter with a floor of [`MIN_MINUTES`] and no ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteAdjuster {
    minutes: u32,
}

impl MinuteAdjuster {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes: minutes.max(MIN_MINUTES),
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Decrement, but only while above the floor
    pub fn decrement(&mut self) {
        if self.minutes > MIN_MINUTES {
            self.minutes -= 1;
        }
    }

    pub fn increment(&mut self) {
        self.minutes = self.minutes.saturating_add(1);
    }

    /// Chosen duration in seconds
    pub fn seconds(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }
}
