//! Busy indicator — a small spinner + label rendered in the top-right
//! corner of a given area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown on the list border while a request is in flight.
/// Renders nothing when `label` is `None`.
pub struct BusyIndicator<'a> {
    pub label: Option<&'a str>,
    /// Monotonically increasing tick counter (drives the spinner frame).
    pub tick: u64,
}

impl Widget for BusyIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(label) = self.label else {
            return;
        };

        let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
        let text = format!(" {frame} {label} ");
        let width = text.chars().count() as u16;
        if area.height == 0 || area.width < width + 2 {
            return;
        }

        // Top-right, inside the border (leave 1 col for the border char).
        let x = area.x + area.width - width - 1;
        let line = Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(x, area.y, &line, width);
    }
}
