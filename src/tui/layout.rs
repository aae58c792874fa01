use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the converter form
pub struct AppLayout {
    pub mode_area: Rect,
    pub form_area: Rect,
    pub results_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the form layout:
    /// - Mode bar: top, 3 rows
    /// - Form + results: 62% width (left), stacked
    /// - History panel: 38% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode bar
                Constraint::Min(8),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(62), // Form + results
                Constraint::Percentage(38), // History
            ])
            .split(vertical_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Input form
                Constraint::Min(4),    // Results / error
            ])
            .split(horizontal_chunks[0]);

        Self {
            mode_area: vertical_chunks[0],
            form_area: left_chunks[0],
            results_area: left_chunks[1],
            history_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
