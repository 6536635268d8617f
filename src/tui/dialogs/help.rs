//! Help dialog
//!
//! Lists the keyboard shortcuts, grouped by where they apply

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{bindings_for, KeyContext};
use crate::tui::layout::centered_rect;
use crate::tui::theme::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .style(palette.base());

    let paragraph = Paragraph::new(help_lines(&palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Global, KeyContext::History, KeyContext::Form] {
        lines.push(Line::from(Span::styled(
            context.title(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for binding in bindings_for(context) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10}", binding.key_label()),
                    Style::default().fg(palette.income),
                ),
                Span::raw("  "),
                Span::raw(binding.description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(palette.muted),
    )));

    lines
}
