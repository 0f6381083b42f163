//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one rendered field, borders included.
pub const FIELD_HEIGHT: u16 = 3;

/// Render data for a single field within a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown in the field's border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any. Takes the place of `hint`.
    pub error: Option<String>,
    /// Helper text shown under the field when it has no error.
    pub hint: Option<String>,
}

impl FormField {
    /// Creates a field with no error or hint.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: None,
            hint: None,
        }
    }

    /// Sets the error message.
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Sets the helper text.
    pub fn with_hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    /// The line shown under the field: the error if set, otherwise the hint.
    pub fn helper_text(&self) -> Option<(&str, Color)> {
        match (&self.error, &self.hint) {
            (Some(err), _) => Some((err.as_str(), Color::Red)),
            (None, Some(hint)) => Some((hint.as_str(), Color::DarkGray)),
            (None, None) => None,
        }
    }
}

/// Moves a focus index forward, wrapping around.
pub fn focus_next(focus: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (focus + 1) % len
}

/// Moves a focus index backward, wrapping around.
pub fn focus_prev(focus: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (focus + len - 1) % len
}

/// Renders form fields within the given area, highlighting `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], focus: usize, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = i == focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Helper text sits on the bottom border of the field.
        if let Some((text, color)) = field.helper_text() {
            let helper = Paragraph::new(Span::styled(text, Style::default().fg(color)));
            let helper_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + FIELD_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(helper, helper_area);
        }
    }
}
