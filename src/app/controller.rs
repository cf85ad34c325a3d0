//! Study session controller
//!
//! Owns every piece of mutable application state and exposes each user
//! callback as a method. Nothing here touches the terminal, so the whole
//! screen flow can be driven from tests.

use crate::{
    app::state::{Navigator, Screen, ScreenEvent},
    config::TimerConfig,
    session::Session,
    timer::{Countdown, MinuteAdjuster, Tick, TickOutcome, Ticker},
    Result,
};
use tracing::{debug, info};

/// Screen flow and countdown owner
#[derive(Debug)]
pub struct Controller {
    config: TimerConfig,
    navigator: Navigator,
    session: Session,
    countdown: Countdown,
    adjuster: MinuteAdjuster,
    /// Live tick task; present only while the countdown is running
    ticker: Option<Ticker>,
}

impl Controller {
    /// Start at the Login screen with the configured default duration
    pub fn new(config: TimerConfig) -> Self {
        let session = Session::new(config.default_seconds());
        let countdown = Countdown::new(session.time_left(), session.username());
        let adjuster = MinuteAdjuster::new(config.default_minutes);

        Self {
            config,
            navigator: Navigator::new(),
            session,
            countdown,
            adjuster,
            ticker: None,
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current_screen()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn adjuster(&self) -> &MinuteAdjuster {
        &self.adjuster
    }

    /// Whether a tick task is alive
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.should_quit()
    }

    pub fn quit(&mut self) {
        self.stop_ticker();
        self.navigator.quit();
    }

    /// Login screen: accept any username and move to Timer
    pub fn login(&mut self, username: &str) -> bool {
        if !self.navigator.dispatch(ScreenEvent::Login) {
            return false;
        }
        self.session.set_username(username);
        info!("Logged in as {:?}", username);
        self.enter_timer();
        true
    }

    /// Timer screen: begin or resume counting down
    pub fn start(&mut self) -> bool {
        if self.screen() != Screen::Timer {
            debug!("Start ignored outside the Timer screen");
            return false;
        }
        if !self.countdown.start() {
            debug!(
                "Start ignored: running={} remaining={}",
                self.countdown.is_running(),
                self.countdown.remaining()
            );
            return false;
        }

        self.stop_ticker();
        self.ticker = Some(Ticker::spawn(self.config.tick_interval()));
        info!("Countdown started at {}s", self.countdown.remaining());
        true
    }

    /// Timer screen: pause counting down
    pub fn stop(&mut self) -> bool {
        let was_running = self.countdown.stop();
        self.stop_ticker();
        if was_running {
            info!("Countdown stopped at {}s", self.countdown.remaining());
        }
        was_running
    }

    /// Timer screen: open the SetTime screen
    pub fn open_set_time(&mut self) -> bool {
        if !self.navigator.dispatch(ScreenEvent::SetTime) {
            return false;
        }
        self.leave_timer();
        self.adjuster = MinuteAdjuster::new(self.config.default_minutes);
        true
    }

    /// Timer screen: finish the session
    pub fn confirm(&mut self) -> bool {
        if !self.navigator.dispatch(ScreenEvent::Confirm) {
            return false;
        }
        self.leave_timer();
        info!("Session confirmed with {}s remaining", self.countdown.remaining());
        true
    }

    /// SetTime screen: one minute more
    pub fn increment_minutes(&mut self) {
        if self.screen() == Screen::SetTime {
            self.adjuster.increment();
        }
    }

    /// SetTime screen: one minute less, never below the floor
    pub fn decrement_minutes(&mut self) {
        if self.screen() == Screen::SetTime {
            self.adjuster.decrement();
        }
    }

    /// SetTime screen: apply the chosen minutes and return to Timer
    pub fn confirm_time(&mut self) -> bool {
        let seconds = self.adjuster.seconds();
        if !self.navigator.dispatch(ScreenEvent::ConfirmTime { seconds }) {
            return false;
        }
        self.session.set_time_left(seconds);
        info!("Countdown set to {}s", seconds);
        self.enter_timer();
        true
    }

    /// Confirmation screen: back to Timer with the last confirmed duration
    pub fn restart(&mut self) -> bool {
        if !self.navigator.dispatch(ScreenEvent::Restart) {
            return false;
        }
        self.enter_timer();
        true
    }

    /// Apply one tick from the ticker. Ticks that arrive while the
    /// countdown is not running are dropped.
    pub fn apply_tick(&mut self, tick: Tick) -> TickOutcome {
        if !self.countdown.is_running() {
            debug!("Dropping stale tick #{}", tick.sequence);
            return TickOutcome::Idle;
        }

        let outcome = self.countdown.tick();
        match outcome {
            TickOutcome::Finished => {
                self.stop_ticker();
                info!("Countdown finished");
            }
            TickOutcome::Ticked(remaining) => debug!("Tick #{}: {}s left", tick.sequence, remaining),
            TickOutcome::Idle => {}
        }
        outcome
    }

    /// Wait for the next tick. `None` when no countdown is running.
    pub async fn next_tick(&mut self) -> Option<Tick> {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.recv().await,
            None => None,
        }
    }

    /// Wait for the next tick and apply it
    pub async fn advance(&mut self) -> Option<TickOutcome> {
        let tick = self.next_tick().await?;
        Some(self.apply_tick(tick))
    }

    /// Apply every tick already queued. Returns how many were applied.
    pub fn drain_ticks(&mut self) -> usize {
        let mut applied = 0;
        while let Some(tick) = self.ticker.as_mut().and_then(Ticker::try_recv) {
            self.apply_tick(tick);
            applied += 1;
        }
        applied
    }

    /// Stop the countdown and wait for the tick task to exit
    pub async fn shutdown(&mut self) -> Result<()> {
        self.countdown.stop();
        if let Some(ticker) = self.ticker.take() {
            ticker.shutdown().await?;
        }
        Ok(())
    }

    fn enter_timer(&mut self) {
        self.stop_ticker();
        self.countdown.reset(self.session.time_left());
        self.countdown.greet(self.session.username());
    }

    fn leave_timer(&mut self) {
        self.countdown.stop();
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
