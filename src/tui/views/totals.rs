//! Balance card and income/expense breakdown

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::currency_fixed;
use crate::tui::app::App;

/// Render the balance card
pub fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let totals = app.aggregates();

    let block = Block::default()
        .title(" Your Balance ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));

    let balance = Paragraph::new(currency_fixed(&app.currency_symbol, totals.balance))
        .style(
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(balance, area);
}

/// Render income and expense side by side
pub fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let totals = app.aggregates();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cards = [
        (" Income ", totals.income, palette.income),
        (" Expense ", totals.expense_magnitude(), palette.expense),
    ];

    for ((title, value, color), rect) in cards.into_iter().zip(halves.iter()) {
        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(palette.border_style(false));

        let text = Paragraph::new(currency_fixed(&app.currency_symbol, value))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(text, *rect);
    }
}
