//! Submit button whose appearance tracks form eligibility.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Caption shown on the button.
pub const SUBMIT_LABEL: &str = "Pay Now";

/// Renders the submit button, enabled or greyed out.
#[mutants::skip]
pub fn draw_submit_button(enabled: bool, frame: &mut Frame, area: Rect) {
    let (text, style) = if enabled {
        (
            format!("[ {SUBMIT_LABEL} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("  {SUBMIT_LABEL}  "),
            Style::default().fg(Color::DarkGray),
        )
    };
    let border = if enabled { Color::Green } else { Color::DarkGray };

    let button = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(button, area);
}
