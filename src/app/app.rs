//! Main application controller
//!
//! Wires keyboard input to the session controller and renders the active
//! screen. [`StudyApp`] holds everything but the terminal so key handling
//! and drawing can be exercised without a tty; [`App`] adds the terminal
//! and the event loop.

use crate::{
    app::{
        controller::Controller,
        screens::{ConfirmationScreen, LoginScreen, SetTimeScreen, TimerScreen},
        state::{Navigator, Screen, UserAction},
        tui::Tui,
    },
    config::TimerConfig,
    Result, StudyTimerError,
};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::{debug, info};

/// Controller plus screen components
#[derive(Debug)]
pub struct StudyApp {
    controller: Controller,
    login_screen: LoginScreen,
    timer_screen: TimerScreen,
    set_time_screen: SetTimeScreen,
    confirmation_screen: ConfirmationScreen,
}

impl StudyApp {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            controller: Controller::new(config),
            login_screen: LoginScreen::new(),
            timer_screen: TimerScreen::new(),
            set_time_screen: SetTimeScreen::new(),
            confirmation_screen: ConfirmationScreen::new(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn login_screen(&self) -> &LoginScreen {
        &self.login_screen
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Decode and apply a key press for the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = Navigator::key_to_action(self.controller.screen(), key);
        self.handle_action(action);
    }

    /// Apply a user action to the current screen
    pub fn handle_action(&mut self, action: UserAction) {
        if action == UserAction::Quit {
            self.controller.quit();
            return;
        }

        match (self.controller.screen(), action) {
            (Screen::Login, UserAction::Input(c)) => self.login_screen.input(c),
            (Screen::Login, UserAction::DeleteChar) => self.login_screen.delete_char(),
            (Screen::Login, UserAction::SwitchField) => self.login_screen.switch_field(),
            (Screen::Login, UserAction::Submit) => {
                let username = self.login_screen.submit();
                self.controller.login(&username);
            }

            (Screen::Timer, UserAction::Start) => {
                self.controller.start();
            }
            (Screen::Timer, UserAction::Stop) => {
                self.controller.stop();
            }
            (Screen::Timer, UserAction::OpenSetTime) => {
                self.controller.open_set_time();
            }
            (Screen::Timer, UserAction::Confirm) => {
                self.controller.confirm();
            }

            (Screen::SetTime, UserAction::Increment) => self.controller.increment_minutes(),
            (Screen::SetTime, UserAction::Decrement) => self.controller.decrement_minutes(),
            (Screen::SetTime, UserAction::Submit) => {
                self.controller.confirm_time();
            }

            (Screen::Confirmation, UserAction::Restart) => {
                self.controller.restart();
            }

            (screen, action) => {
                if action != UserAction::None {
                    debug!("No handler for {:?} on {:?}", action, screen);
                }
            }
        }
    }

    /// Apply queued countdown ticks
    pub fn update(&mut self) -> usize {
        self.controller.drain_ticks()
    }

    /// Draw the current screen
    pub fn render(&self, f: &mut Frame) {
        match self.controller.screen() {
            Screen::Login => self.login_screen.render(f),
            Screen::Timer => self.timer_screen.render(f, self.controller.countdown()),
            Screen::SetTime => self.set_time_screen.render(f, self.controller.adjuster()),
            Screen::Confirmation => self.confirmation_screen.render(f),
        }
    }
}

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    study: StudyApp,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TimerConfig) -> Result<Self> {
        let tui = Tui::new(config.refresh_rate())
            .map_err(|e| StudyTimerError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            tui,
            study: StudyApp::new(config),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        info!("Terminal initialized");
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.study.should_quit() {
            self.study.update();

            let study = &self.study;
            self.tui.draw(|f| study.render(f))?;

            if let Some(key) = self.tui.next_key()? {
                self.study.handle_key(key);
            }

            // Give spawned tasks a turn between frames
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Stop the countdown task and give the terminal back
    pub async fn shutdown(&mut self) -> Result<()> {
        let stopped = self.study.controller_mut().shutdown().await;
        self.tui.restore()?;
        info!("Shut down");
        stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::render_to_string;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut StudyApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut StudyApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_via_keys() {
        let mut app = StudyApp::new(TimerConfig::default());
        type_text(&mut app, "quinn");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "hunter2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller().screen(), Screen::Timer);
        assert_eq!(app.controller().session().username(), "quinn");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_set_time_via_keys() {
        let mut app = StudyApp::new(TimerConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.controller().screen(), Screen::SetTime);

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('+'));
        }
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller().screen(), Screen::Timer);
        assert_eq!(app.controller().countdown().remaining(), 12 * 60);
    }

    #[test]
    fn test_confirm_and_restart_via_keys() {
        let mut app = StudyApp::new(TimerConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.controller().screen(), Screen::Confirmation);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller().screen(), Screen::Timer);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = StudyApp::new(TimerConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit(), "q is text on the login form");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_follows_screen() {
        let mut app = StudyApp::new(TimerConfig::default());
        let text = render_to_string(70, 20, |f| app.render(f));
        assert!(text.contains("Username"));

        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Enter);
        let text = render_to_string(70, 20, |f| app.render(f));
        assert!(text.contains("10:00"));
        assert!(text.contains("Hello ada!"));
    }
}
