//! Confirmation screen implementation

use super::{centered, frame_layout, render_help, render_title};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Session completed screen
#[derive(Debug, Default)]
pub struct ConfirmationScreen;

impl ConfirmationScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame) {
        let (title, body, help) = frame_layout(f.size());

        render_title(f, title, "Good Job!");

        let text = vec![
            Line::from(Span::styled(
                "You completed your study session!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press Enter to start again."),
        ];
        let paragraph = Paragraph::new(text).alignment(Alignment::Center);
        f.render_widget(paragraph, centered(body, 3));

        render_help(f, help, &[("Enter", "Start Again"), ("Q", "Quit")]);
    }
}
