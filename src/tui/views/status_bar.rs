//! Status bar view
//!
//! Shows the entry count, the input mode and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ledger::LedgerState;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let mut spans = vec![];

    let (mode, mode_color) = match app.input_mode {
        InputMode::Normal => (" NORMAL ", palette.accent),
        InputMode::Editing => (" EDITING ", palette.income),
    };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(palette.background)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    ));

    let count = match app.ledger_state() {
        LedgerState::Empty => " no entries".to_string(),
        LedgerState::HasEntries => format!(" {} entries", app.transactions().len()),
    };
    spans.push(Span::raw(count));
    spans.push(Span::styled(" │ ", Style::default().fg(palette.muted)));
    spans.push(Span::raw(format!("{} mode", app.theme())));

    let hints = match app.input_mode {
        InputMode::Normal => " q:Quit  ?:Help  a:Add  d:Delete  t:Theme ",
        InputMode::Editing => " Enter:Add  Tab:Field  Esc:Done ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
