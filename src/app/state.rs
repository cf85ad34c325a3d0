//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event
//! processing for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Username and password form
    #[default]
    Login,
    /// Countdown with Start, Stop, Set Time, Confirm
    Timer,
    /// Minute adjuster
    SetTime,
    /// Session completed
    Confirmation,
}

/// Transition requests raised by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Login accepted
    Login,
    /// Open the SetTime screen
    SetTime,
    /// Finish the session
    Confirm,
    /// Chosen duration from SetTime
    ConfirmTime { seconds: u32 },
    /// Start again from Confirmation
    Restart,
}

/// User intents decoded from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Typed character for the focused login field
    Input(char),
    /// Remove the last character of the focused login field
    DeleteChar,
    /// Move focus between login fields
    SwitchField,
    /// Enter on Login or SetTime
    Submit,
    Start,
    Stop,
    OpenSetTime,
    Confirm,
    Increment,
    Decrement,
    Restart,
    /// Quit application (Ctrl+C anywhere, q/Esc outside text entry)
    Quit,
    /// No action
    None,
}

/// Screen navigator
#[derive(Debug)]
pub struct Navigator {
    current_screen: Screen,
    previous_screen: Option<Screen>,
    should_quit: bool,
}

impl Navigator {
    /// Create a navigator at the Login screen
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Login,
            previous_screen: None,
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn previous_screen(&self) -> Option<Screen> {
        self.previous_screen
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Where `event` leads from `screen`, if it is accepted there
    pub fn target(screen: Screen, event: ScreenEvent) -> Option<Screen> {
        match (screen, event) {
            (Screen::Login, ScreenEvent::Login) => Some(Screen::Timer),
            (Screen::Timer, ScreenEvent::SetTime) => Some(Screen::SetTime),
            (Screen::Timer, ScreenEvent::Confirm) => Some(Screen::Confirmation),
            (Screen::SetTime, ScreenEvent::ConfirmTime { .. }) => Some(Screen::Timer),
            (Screen::Confirmation, ScreenEvent::Restart) => Some(Screen::Timer),
            _ => None,
        }
    }

    /// Apply a transition request. Events that the current screen does not
    /// offer are ignored and return false.
    pub fn dispatch(&mut self, event: ScreenEvent) -> bool {
        match Self::target(self.current_screen, event) {
            Some(next) => {
                debug!("Screen {:?} -> {:?} on {:?}", self.current_screen, next, event);
                self.previous_screen = Some(self.current_screen);
                self.current_screen = next;
                true
            }
            None => {
                debug!("Ignoring {:?} on screen {:?}", event, self.current_screen);
                false
            }
        }
    }

    /// Convert keyboard event to a user action for the given screen
    pub fn key_to_action(screen: Screen, key: KeyEvent) -> UserAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return UserAction::Quit;
        }

        match screen {
            Screen::Login => match key.code {
                KeyCode::Esc => UserAction::Quit,
                KeyCode::Enter => UserAction::Submit,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    UserAction::SwitchField
                }
                KeyCode::Backspace => UserAction::DeleteChar,
                KeyCode::Char(c) => UserAction::Input(c),
                _ => UserAction::None,
            },
            Screen::Timer => match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => UserAction::Start,
                KeyCode::Char('x') | KeyCode::Char('X') => UserAction::Stop,
                KeyCode::Char('t') | KeyCode::Char('T') => UserAction::OpenSetTime,
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => UserAction::Confirm,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UserAction::Quit,
                _ => UserAction::None,
            },
            Screen::SetTime => match key.code {
                KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => UserAction::Decrement,
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
                    UserAction::Increment
                }
                KeyCode::Enter | KeyCode::Char(' ') => UserAction::Submit,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UserAction::Quit,
                _ => UserAction::None,
            },
            Screen::Confirmation => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                    UserAction::Restart
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UserAction::Quit,
                _ => UserAction::None,
            },
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigator_creation() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current_screen(), Screen::Login);
        assert!(!navigator.should_quit());
        assert!(navigator.previous_screen().is_none());
    }

    #[test]
    fn test_full_transition_cycle() {
        let mut navigator = Navigator::new();

        assert!(navigator.dispatch(ScreenEvent::Login));
        assert_eq!(navigator.current_screen(), Screen::Timer);

        assert!(navigator.dispatch(ScreenEvent::SetTime));
        assert_eq!(navigator.current_screen(), Screen::SetTime);

        assert!(navigator.dispatch(ScreenEvent::ConfirmTime { seconds: 60 }));
        assert_eq!(navigator.current_screen(), Screen::Timer);
        assert_eq!(navigator.previous_screen(), Some(Screen::SetTime));

        assert!(navigator.dispatch(ScreenEvent::Confirm));
        assert_eq!(navigator.current_screen(), Screen::Confirmation);

        assert!(navigator.dispatch(ScreenEvent::Restart));
        assert_eq!(navigator.current_screen(), Screen::Timer);
    }

    #[test]
    fn test_events_not_offered_are_ignored() {
        let mut navigator = Navigator::new();
        assert!(!navigator.dispatch(ScreenEvent::Restart));
        assert!(!navigator.dispatch(ScreenEvent::Confirm));
        assert!(!navigator.dispatch(ScreenEvent::ConfirmTime { seconds: 60 }));
        assert_eq!(navigator.current_screen(), Screen::Login);
        assert!(navigator.previous_screen().is_none());

        navigator.dispatch(ScreenEvent::Login);
        assert!(!navigator.dispatch(ScreenEvent::Login));
        assert!(!navigator.dispatch(ScreenEvent::Restart));
        assert_eq!(navigator.current_screen(), Screen::Timer);
    }

    #[test]
    fn test_no_terminal_screen() {
        for screen in [Screen::Login, Screen::Timer, Screen::SetTime, Screen::Confirmation] {
            let events = [
                ScreenEvent::Login,
                ScreenEvent::SetTime,
                ScreenEvent::Confirm,
                ScreenEvent::ConfirmTime { seconds: 60 },
                ScreenEvent::Restart,
            ];
            let reachable = events
                .iter()
                .filter_map(|e| Navigator::target(screen, *e))
                .count();
            assert!(reachable > 0, "{:?} has no way out", screen);
        }
    }

    #[test]
    fn test_quit_handling() {
        let mut navigator = Navigator::new();
        navigator.quit();
        assert!(navigator.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for screen in [Screen::Login, Screen::Timer, Screen::SetTime, Screen::Confirmation] {
            assert_eq!(Navigator::key_to_action(screen, ctrl_c), UserAction::Quit);
        }
    }

    #[test]
    fn test_login_keys_are_text() {
        assert_eq!(
            Navigator::key_to_action(Screen::Login, key(KeyCode::Char('q'))),
            UserAction::Input('q')
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Login, key(KeyCode::Tab)),
            UserAction::SwitchField
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Login, key(KeyCode::Backspace)),
            UserAction::DeleteChar
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Login, key(KeyCode::Enter)),
            UserAction::Submit
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Login, key(KeyCode::Esc)),
            UserAction::Quit
        );
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(
            Navigator::key_to_action(Screen::Timer, key(KeyCode::Char('s'))),
            UserAction::Start
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Timer, key(KeyCode::Char('x'))),
            UserAction::Stop
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Timer, key(KeyCode::Char('t'))),
            UserAction::OpenSetTime
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Timer, key(KeyCode::Enter)),
            UserAction::Confirm
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Timer, key(KeyCode::Char('q'))),
            UserAction::Quit
        );
    }

    #[test]
    fn test_set_time_and_confirmation_keys() {
        assert_eq!(
            Navigator::key_to_action(Screen::SetTime, key(KeyCode::Char('-'))),
            UserAction::Decrement
        );
        assert_eq!(
            Navigator::key_to_action(Screen::SetTime, key(KeyCode::Right)),
            UserAction::Increment
        );
        assert_eq!(
            Navigator::key_to_action(Screen::SetTime, key(KeyCode::Enter)),
            UserAction::Submit
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Confirmation, key(KeyCode::Char('r'))),
            UserAction::Restart
        );
        assert_eq!(
            Navigator::key_to_action(Screen::Confirmation, key(KeyCode::F(1))),
            UserAction::None
        );
    }
}
