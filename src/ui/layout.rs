use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the viewer
pub struct Layout;

impl Layout {
    /// Create the main layout with search bar, content area, and status bar
    ///
    /// Returns: (search_area, content_area, status_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Layout without the search bar (loading and empty states)
    ///
    /// Returns: (content_area, status_area)
    pub fn bare(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1])
    }
}
