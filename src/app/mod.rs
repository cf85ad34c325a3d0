//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! the session controller, and application state handling.

pub mod app;
pub mod controller;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, StudyApp};
pub use controller::Controller;
pub use screens::{ConfirmationScreen, LoginScreen, SetTimeScreen, TimerScreen};
pub use state::{Navigator, Screen, ScreenEvent, UserAction};
pub use tui::Tui;
