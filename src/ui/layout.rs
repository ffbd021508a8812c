//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the `[ Open ]` button, borders included.
const OPEN_BUTTON_WIDTH: u16 = 10;

/// Primary screen layout: title, path bar with the open button, entry list
/// and a bottom status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub path_area: Rect,
    pub open_button_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(3), // path bar + button
                Constraint::Min(3),    // entry list (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(OPEN_BUTTON_WIDTH)])
            .split(rows[1]);

        Self {
            header_area: rows[0],
            path_area: bar[0],
            open_button_area: bar[1],
            list_area: rows[2],
            status_area: rows[3],
        }
    }

    /// The list area without its border.
    pub fn list_inner(&self) -> Rect {
        Rect {
            x: self.list_area.x.saturating_add(1),
            y: self.list_area.y.saturating_add(1),
            width: self.list_area.width.saturating_sub(2),
            height: self.list_area.height.saturating_sub(2),
        }
    }
}

pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x.saturating_add(rect.width) && y >= rect.y && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header_area.y, 0);
        assert_eq!(layout.path_area.y, 1);
        assert_eq!(layout.list_area.y, 4);
        assert_eq!(layout.status_area.y, 23);
        assert_eq!(layout.open_button_area.width, OPEN_BUTTON_WIDTH);
        assert_eq!(layout.list_inner().y, 5);
    }

    #[test]
    fn test_point_in_rect_excludes_far_edge() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(point_in_rect(r, 2, 2));
        assert!(point_in_rect(r, 4, 4));
        assert!(!point_in_rect(r, 5, 4));
        assert!(!point_in_rect(r, 1, 2));
    }
}
