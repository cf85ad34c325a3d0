//! Set Time screen implementation

use super::{centered, frame_layout, render_help, render_title};
use crate::timer::MinuteAdjuster;
use crate::util::format::format_minutes;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Minute picker component
#[derive(Debug, Default)]
pub struct SetTimeScreen;

impl SetTimeScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the set time screen
    pub fn render(&self, f: &mut Frame, adjuster: &MinuteAdjuster) {
        let (title, body, help) = frame_layout(f.size());

        render_title(f, title, "Set Study Time");

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(5),  // -
                Constraint::Length(14), // value
                Constraint::Length(5),  // +
                Constraint::Min(0),
            ])
            .split(centered(body, 3));

        let button_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        for (label, area) in [("-", row[1]), ("+", row[3])] {
            let button = Paragraph::new(label)
                .style(button_style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(button, area);
        }

        let value = Paragraph::new(format_minutes(adjuster.minutes()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(value, row[2]);

        render_help(
            f,
            help,
            &[("←/-", "Less"), ("→/+", "More"), ("Enter", "Confirm")],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::render_to_string;

    #[test]
    fn test_renders_minutes() {
        let mut adjuster = MinuteAdjuster::new(10);
        adjuster.decrement();
        let text = render_to_string(60, 16, |f| SetTimeScreen::new().render(f, &adjuster));
        assert!(text.contains("Set Study Time"));
        assert!(text.contains("9 min"));
    }
}
