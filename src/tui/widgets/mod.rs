//! Reusable TUI widgets.

pub mod form;
pub mod submit_button;

pub use form::{FormField, draw_form};
pub use submit_button::draw_submit_button;

/// Flattens a rendered buffer into one string per row, for assertions.
#[cfg(test)]
pub(crate) fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}
