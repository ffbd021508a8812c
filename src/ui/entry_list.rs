//! Custom Ratatui widget that renders the cursor's entries as a flat list
//! with folder/file icons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::cursor::CursorState;

use super::theme::Theme;

const DIR_ICON: &str = "▸ ";
const FILE_ICON: &str = "· ";

// ───────────────────────────────────────── state ─────────────

/// Persistent state for the list widget (highlighted row, scroll offset).
#[derive(Debug, Default)]
pub struct EntryListState {
    /// Index into the cursor's entries under the keyboard highlight.
    pub highlighted: usize,
    /// Vertical scroll offset (first visible row).
    pub offset: usize,
}

impl EntryListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.highlighted < len - 1 {
            self.highlighted += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn select_last(&mut self, len: usize) {
        self.highlighted = len.saturating_sub(1);
    }

    /// Keep the highlight inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if self.highlighted >= len {
            self.highlighted = len.saturating_sub(1);
        }
    }

    /// Ensure the highlighted row is visible within a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.highlighted < self.offset {
            self.offset = self.highlighted;
        } else if self.highlighted >= self.offset + height {
            self.offset = self.highlighted - height + 1;
        }
    }

    /// Entry index under a viewport row, if any.
    pub fn row_to_index(&self, row: usize, len: usize) -> Option<usize> {
        let idx = self.offset + row;
        (idx < len).then_some(idx)
    }
}

// ───────────────────────────────────────── widget ────────────

/// The list widget itself — created fresh each frame.
pub struct EntryList<'a> {
    cursor: &'a CursorState,
    block: Option<Block<'a>>,
}

impl<'a> EntryList<'a> {
    pub fn new(cursor: &'a CursorState) -> Self {
        Self { cursor, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for EntryList<'_> {
    type State = EntryListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 {
            return;
        }

        let entries = self.cursor.entries();
        if entries.is_empty() {
            let line = Line::from(Span::styled("(empty directory)", Theme::empty_style()));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        state.clamp(entries.len());
        state.clamp_scroll(inner.height as usize);

        let visible = entries
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (idx, entry)) in visible.enumerate() {
            let y = inner.y + i as u16;
            let icon = if entry.is_directory { DIR_ICON } else { FILE_ICON };
            let mut style = if entry.is_directory {
                Theme::dir_style()
            } else {
                Theme::file_style()
            };
            if idx == state.highlighted {
                style = style.patch(Theme::highlight_style());
            }
            if self.cursor.is_selected(entry) {
                style = style.patch(Theme::selected_style());
            }

            let line = Line::from(Span::styled(format!("{icon}{}", entry.name), style));
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::DirectoryListing;
    use ratatui::widgets::Borders;

    #[test]
    fn test_scroll_follows_highlight() {
        let mut state = EntryListState::default();
        for _ in 0..10 {
            state.select_next(20);
        }
        state.clamp_scroll(5);
        assert_eq!(state.highlighted, 10);
        assert_eq!(state.offset, 6);

        state.highlighted = 2;
        state.clamp_scroll(5);
        assert_eq!(state.offset, 2);
    }

    #[test]
    fn test_clamp_after_shorter_listing() {
        let mut state = EntryListState { highlighted: 8, offset: 0 };
        state.clamp(3);
        assert_eq!(state.highlighted, 2);
        state.clamp(0);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_empty_listing_in_collapsed_area_draws_nothing() {
        let cursor = CursorState::from_listing(DirectoryListing::default());
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let mut state = EntryListState::default();

        EntryList::new(&cursor)
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf, &mut state);

        assert!(!buf.content().iter().any(|c| c.symbol().contains('(')));
    }

    #[test]
    fn test_row_to_index_respects_offset() {
        let state = EntryListState { highlighted: 0, offset: 4 };
        assert_eq!(state.row_to_index(1, 10), Some(5));
        assert_eq!(state.row_to_index(6, 10), None);
    }
}
