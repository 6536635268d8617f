//! Blocking alert dialog
//!
//! Shows an error or warning with recovery suggestions. While it is open the
//! handler swallows every key except the ones that dismiss it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::notification::NoticeKind;
use crate::error::TrackerError;

/// What an alert dialog shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: NoticeKind,
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Describe a tracker error for the user
    pub fn from_error(error: &TrackerError) -> Self {
        match error {
            TrackerError::IncompleteSubmission => Self {
                kind: NoticeKind::Warning,
                title: "Incomplete Transaction".to_string(),
                details: error.to_string(),
                suggestions: vec![
                    "Fill in both the description and the amount".to_string(),
                    "Use a negative amount for an expense".to_string(),
                ],
            },
            TrackerError::Config(msg) => Self::simple("Configuration Error", msg.clone())
                .with_suggestion("Check config.json for syntax errors")
                .with_suggestion("Running with default settings for now"),
            TrackerError::Io(msg) => Self::simple("I/O Error", msg.clone())
                .with_suggestion("Check that the config directory is writable"),
            TrackerError::Json(msg) => Self::simple("Data Error", msg.clone()),
        }
    }

    /// Create a plain error with no suggestions
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an alert dialog
pub struct ErrorDialog<'a> {
    info: &'a ErrorInfo,
    background: Color,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(info: &'a ErrorInfo, background: Color) -> Self {
        Self { info, background }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.info.kind {
            NoticeKind::Info => Color::Red,
            other => other.color(),
        };

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.info.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(self.background));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.info.details.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.info.suggestions.is_empty() {
            let lines: Vec<Line> = self
                .info
                .suggestions
                .iter()
                .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())]))
                .collect();

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Enter or Esc to dismiss")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an alert dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = ((u32::from(parent.width) * 70 / 100) as u16)
        .clamp(30, 60)
        .min(parent.width);
    let height = 10.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_submission_is_warning() {
        let info = ErrorInfo::from_error(&TrackerError::IncompleteSubmission);

        assert_eq!(info.kind, NoticeKind::Warning);
        assert_eq!(info.details, "Please enter a description and amount");
        assert!(!info.suggestions.is_empty());
    }

    #[test]
    fn test_config_error_info() {
        let info = ErrorInfo::from_error(&TrackerError::Config("bad theme".into()));
        assert_eq!(info.title, "Configuration Error");
        assert!(info.details.contains("bad theme"));
        assert_eq!(info.suggestions.len(), 2);
    }

    #[test]
    fn test_io_and_json_errors() {
        let io = ErrorInfo::from_error(&TrackerError::Io("disk full".into()));
        assert_eq!(io.title, "I/O Error");
        assert_eq!(io.kind, NoticeKind::Info);

        let json = ErrorInfo::from_error(&TrackerError::Json("trailing comma".into()));
        assert_eq!(json.title, "Data Error");
        assert!(json.suggestions.is_empty());
    }

    #[test]
    fn test_dialog_area_is_centered_and_clamped() {
        let area = error_dialog_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area.width, 60);
        assert_eq!(area.x, 20);

        let tiny = error_dialog_area(Rect::new(0, 0, 20, 5));
        assert_eq!(tiny.width, 20);
        assert_eq!(tiny.height, 5);
    }
}
