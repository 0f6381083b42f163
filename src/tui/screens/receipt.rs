//! Receipt screen shown after the gateway accepts a payment.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::gateway::Receipt;
use crate::model::{display_expiration, expiration_cutoff};
use crate::tui::action::Action;

/// Handles a key event on the receipt screen.
pub fn handle_receipt_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::NewPayment,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Text lines describing a receipt.
pub fn receipt_lines(receipt: &Receipt) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let expires = expiration_cutoff(&receipt.card_expiration)
        .map(display_expiration)
        .unwrap_or_else(|_| receipt.card_expiration.clone());

    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("  {name:<12}"), label),
            Span::styled(text, value),
        ])
    };

    vec![
        Line::from(Span::styled(
            "Payment accepted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Reference", receipt.reference.clone()),
        row(
            "Card",
            format!("{} ending in {}", receipt.brand, receipt.last4),
        ),
        row("Expires", expires),
        row(
            "Submitted",
            receipt
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        ),
    ]
}

/// Renders the receipt screen.
#[mutants::skip]
pub fn draw_receipt(receipt: &Receipt, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Receipt ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(Paragraph::new(receipt_lines(receipt)), content_area);

    let footer = Paragraph::new("Enter: new payment  q/Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
