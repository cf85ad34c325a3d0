//! Countdown timing
//!
//! The countdown state, the minute adjuster used by the SetTime screen, and
//! the cancellable tick task that drives the countdown.

pub mod adjuster;
pub mod countdown;
pub mod ticker;

pub use adjuster::MinuteAdjuster;
pub use countdown::{Countdown, TickOutcome};
pub use ticker::{Tick, Ticker};
