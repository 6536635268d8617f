//! Title line with the theme toggle

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme::toggle_label;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Expense Tracker",
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, columns[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(toggle_label(app.theme()), Style::default().fg(palette.accent)),
        Span::styled(" [t]", Style::default().fg(palette.muted)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, columns[1]);
}
