//! Transaction history
//!
//! Newest first. Each row shows the description, the signed amount and a
//! delete marker; the selected row is what `d` removes.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::signed_amount;
use crate::tui::app::{App, FocusedPanel};

/// Render the history table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focused_panel == FocusedPanel::History;

    let block = Block::default()
        .title(format!(" History ({}) ", app.transactions().len()))
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(is_focused));

    if app.transactions().is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let amounts: Vec<String> = app
        .transactions()
        .iter()
        .map(|txn| signed_amount(&app.currency_symbol, txn.amount))
        .collect();

    let widths = [
        Constraint::Min(12), // Description
        Constraint::Length(amount_column_width(&amounts)), // Amount
        Constraint::Length(2), // Delete marker
    ];

    let rows: Vec<Row> = app
        .transactions()
        .iter()
        .zip(amounts)
        .map(|(txn, amount)| {
            let color = palette.amount_color(txn.is_expense());
            Row::new(vec![
                Cell::from(txn.text.clone()),
                Cell::from(amount).style(Style::default().fg(color)),
                Cell::from("✕").style(Style::default().fg(palette.muted)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Width that fits the widest amount, never narrower than eight columns
fn amount_column_width(amounts: &[String]) -> u16 {
    let widest = amounts
        .iter()
        .map(|amount| Span::raw(amount.as_str()).width())
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX).max(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_column_fits_widest() {
        let amounts = vec!["+₹ 20000".to_string(), "-₹ 12345678901234".to_string()];
        assert_eq!(amount_column_width(&amounts), 17);
    }

    #[test]
    fn test_amount_column_minimum() {
        assert_eq!(amount_column_width(&[]), 8);
        assert_eq!(amount_column_width(&["+₹ 5".to_string()]), 8);
    }
}
