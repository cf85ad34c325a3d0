//! Login screen implementation
//!
//! Username and password form. Any input is accepted; the password is
//! only ever shown masked and is discarded on login.

use super::{centered, frame_layout, render_help, render_title};
use crate::util::format::mask;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Focusable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    fn title(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    fn other(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Login form state
#[derive(Debug, Default)]
pub struct LoginScreen {
    username: String,
    password: String,
    focus: LoginField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    /// Append a character to the focused field
    pub fn input(&mut self, c: char) {
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    /// Remove the last character of the focused field
    pub fn delete_char(&mut self) {
        match self.focus {
            LoginField::Username => self.username.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn switch_field(&mut self) {
        self.focus = self.focus.other();
    }

    /// Hand over the username and wipe the form
    pub fn submit(&mut self) -> String {
        self.password.clear();
        self.focus = LoginField::Username;
        std::mem::take(&mut self.username)
    }

    /// Render the login screen
    pub fn render(&self, f: &mut Frame) {
        let (title, body, help) = frame_layout(f.size());

        render_title(f, title, "STUDY TIMER");
        self.render_form(f, centered(body, 6));
        render_help(
            f,
            help,
            &[("Tab", "Switch field"), ("Enter", "Login"), ("Esc", "Quit")],
        );
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(columns[1]);

        let masked = mask(&self.password);
        let fields = [
            (LoginField::Username, self.username.as_str()),
            (LoginField::Password, masked.as_str()),
        ];

        for ((field, value), area) in fields.into_iter().zip(rows.iter()) {
            let focused = field == self.focus;
            let border = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let input = Paragraph::new(value.to_string())
                .alignment(Alignment::Left)
                .block(
                    Block::default()
                        .title(field.title())
                        .borders(Borders::ALL)
                        .border_style(border),
                );
            f.render_widget(input, *area);
        }
    }
}
