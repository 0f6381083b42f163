//! Payment screen: the card details form and its submit button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::PaymentForm;
use crate::model::{Clock, FieldId, SystemClock};
use crate::tui::action::Action;
use crate::tui::widgets::form::{self, FIELD_HEIGHT, FormField, draw_form};
use crate::tui::widgets::submit_button::draw_submit_button;

/// Heading shown above the fields.
pub const HEADING: &str = "Enter your credit card information";

/// State for the payment screen.
#[derive(Debug, Clone)]
pub struct PaymentScreenState<C = SystemClock> {
    form: PaymentForm<C>,
    focus: usize,
    general_error: Option<String>,
}

impl Default for PaymentScreenState<SystemClock> {
    fn default() -> Self {
        Self::new(PaymentForm::new())
    }
}

impl<C: Clock> PaymentScreenState<C> {
    /// Creates the screen around an existing form. Focus starts on the name.
    pub fn new(form: PaymentForm<C>) -> Self {
        Self {
            form,
            focus: 0,
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = form::focus_next(self.focus, FieldId::ALL.len());
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = form::focus_prev(self.focus, FieldId::ALL.len());
                Action::None
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Action::None,
            KeyCode::Char(ch) => {
                self.edit(|value| value.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit(|value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the form state.
    pub fn form(&self) -> &PaymentForm<C> {
        &self.form
    }

    /// Returns the focused field.
    pub fn focused_field(&self) -> FieldId {
        FieldId::from_index(self.focus).unwrap_or(FieldId::CardName)
    }

    /// Sets a message not tied to any specific field, e.g. a gateway failure.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Clears the form and returns focus to the first field.
    pub fn reset(&mut self) {
        self.form.reset();
        self.focus = 0;
        self.general_error = None;
    }

    /// Builds render data for each field.
    pub fn fields(&self) -> Vec<FormField> {
        FieldId::ALL
            .iter()
            .map(|&field| {
                let hint = match field {
                    FieldId::CardCvv => self
                        .form
                        .card_brand()
                        .map(|brand| brand.cvv_hint().to_string()),
                    _ => None,
                };
                FormField::new(field.label(), self.form.value(field))
                    .with_error(self.form.error(field).map(ToString::to_string))
                    .with_hint(hint)
            })
            .collect()
    }

    /// Applies `edit` to the focused field's text and reports the new value.
    fn edit(&mut self, edit: impl FnOnce(&mut String)) {
        let field = self.focused_field();
        let mut value = self.form.value(field).to_string();
        edit(&mut value);
        self.form.on_field_change(field, value);
        self.general_error = None;
    }

    /// Submits when the button is enabled; a disabled button ignores Enter.
    fn submit(&mut self) -> Action {
        if !self.form.can_submit() {
            return Action::None;
        }
        match self.form.on_submit() {
            Ok(details) => Action::Submit(details),
            Err(e) => {
                self.general_error = Some(e.to_string());
                Action::None
            }
        }
    }
}

/// Renders the payment screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_payment<C: Clock>(state: &PaymentScreenState<C>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" payform ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = state.fields();
    let [heading_area, form_area, error_area, button_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT * fields.len() as u16),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, heading_area);

    draw_form(&fields, state.focus, frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    draw_submit_button(state.form().can_submit(), frame, button_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: pay  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
