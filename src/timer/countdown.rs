//! Countdown state
//!
//! The Timer screen's remaining seconds, running flag, and message. Ticks
//! are applied here one at a time by whoever owns the countdown; the ticker
//! task never touches this state.

use crate::{greeting, COMPLETION_MESSAGE};

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed
    Idle,
    /// Decremented; carries the new remaining seconds
    Ticked(u32),
    /// Reached zero on this tick and stopped
    Finished,
}

/// Live countdown shown on the Timer screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
    message: String,
}

impl Countdown {
    /// Create a stopped countdown greeting `username`
    pub fn new(remaining: u32, username: &str) -> Self {
        Self {
            remaining,
            running: false,
            message: greeting(username),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Set the running flag. Returns false when already running or when
    /// there is nothing left to count down.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Clear the running flag. Returns whether it was set.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Overwrite the remaining seconds and stop
    pub fn reset(&mut self, remaining: u32) {
        self.remaining = remaining;
        self.running = false;
    }

    /// Back to the greeting, stopped, remaining seconds untouched
    pub fn greet(&mut self, username: &str) {
        self.running = false;
        self.message = greeting(username);
    }

    /// Apply one tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining == 0 {
            return TickOutcome::Idle;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.message = COMPLETION_MESSAGE.to_string();
            self.running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Ticked(self.remaining)
        }
    }
}
