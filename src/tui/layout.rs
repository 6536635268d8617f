//! Layout definitions for the TUI
//!
//! A single centered column of cards: header, balance, breakdown, form and
//! history, with the status bar pinned to the bottom row.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the card column gets
pub const MAX_CONTENT_WIDTH: u16 = 72;

/// Layout regions for the TUI
pub struct AppLayout {
    pub header: Rect,
    pub balance: Rect,
    pub breakdown: Rect,
    pub form: Rect,
    pub history: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let column = centered_column(MAX_CONTENT_WIDTH, vertical[0]);

        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Balance
                Constraint::Length(3), // Income / expense
                Constraint::Length(6), // Form
                Constraint::Min(3),    // History
            ])
            .split(column);

        Self {
            header: cards[0],
            balance: cards[1],
            breakdown: cards[2],
            form: cards[3],
            history: cards[4],
            status_bar: vertical[1],
        }
    }
}

/// A full-height column at most `max_width` wide, centered horizontally
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let width = max_width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column() {
        let column = centered_column(72, Rect::new(0, 0, 100, 30));
        assert_eq!(column, Rect::new(14, 0, 72, 30));

        let narrow = centered_column(72, Rect::new(0, 0, 40, 30));
        assert_eq!(narrow, Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.status_bar, Rect::new(0, 39, 80, 1));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.balance.y, 1);
        assert_eq!(layout.form.height, 6);
        assert_eq!(layout.history.y, layout.form.y + 6);
        assert_eq!(layout.history.bottom(), 39);
    }
}
