//! Read-only path field with the `[ Open ]` button beside it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::Theme;

/// Shows the cursor's path. The button is drawn disabled unless a file is
/// selected.
pub struct PathBar<'a> {
    pub path: &'a str,
    /// Name of the selected file, shown as the field's title.
    pub selected_name: Option<&'a str>,
    pub can_open: bool,
    pub button_area: Rect,
}

impl Widget for PathBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut field = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        if let Some(name) = self.selected_name {
            field = field.title(format!(" {name} ")).title_style(Theme::title_style());
        }
        Paragraph::new(Line::from(Span::styled(self.path, Theme::path_style())))
            .block(field)
            .render(area, buf);

        let style = if self.can_open {
            Theme::button_enabled_style()
        } else {
            Theme::button_disabled_style()
        };
        Paragraph::new(Line::from(Span::styled(" Open ", style)))
            .centered()
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(self.button_area, buf);
    }
}
