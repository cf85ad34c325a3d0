//! Timer screen implementation
//!
//! Shows the message line, the `MM:SS` countdown, and the Start, Stop,
//! Set Time, and Confirm controls.

use super::{centered, frame_layout, render_help, render_title};
use crate::timer::Countdown;
use crate::util::format::format_clock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Timer screen component
#[derive(Debug, Default)]
pub struct TimerScreen;

impl TimerScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the timer screen
    pub fn render(&self, f: &mut Frame, countdown: &Countdown) {
        let (title, body, help) = frame_layout(f.size());

        let status = if countdown.is_running() {
            "Study Timer - Running"
        } else {
            "Study Timer - Stopped"
        };
        render_title(f, title, status);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Message
                Constraint::Length(3), // Clock
            ])
            .split(centered(body, 5));

        let message = Paragraph::new(countdown.message().to_string())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(message, chunks[0]);

        let clock_color = if countdown.is_running() {
            Color::Cyan
        } else {
            Color::Blue
        };
        let clock = Paragraph::new(Line::from(format_clock(countdown.remaining())))
            .style(
                Style::default()
                    .fg(clock_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(clock_color)),
            );
        f.render_widget(clock, chunks[1]);

        render_help(
            f,
            help,
            &[
                ("S", "Start"),
                ("X", "Stop"),
                ("T", "Set Time"),
                ("C", "Confirm"),
                ("Q", "Quit"),
            ],
        );
    }
}
