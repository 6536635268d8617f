//! TUI Views module
//!
//! The ledger view is drawn in full on every frame: totals are recomputed
//! from the transaction list each time.

pub mod form;
pub mod header;
pub mod history;
pub mod status_bar;
pub mod totals;

use ratatui::{widgets::Block, Frame};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    totals::render_balance(frame, app, layout.balance);
    totals::render_breakdown(frame, app, layout.breakdown);
    form::render(frame, app, layout.form);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification, palette.background),
            notification_area(frame.area()),
        );
    }

    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Alert(info) => dialogs::alert::render(frame, info, palette.background),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 36)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_totals_and_history() {
        let app = App::new(&Settings::default());
        let screen = draw(&app);

        assert!(screen.contains("Expense Tracker"));
        assert!(screen.contains("₹ 18200.00"));
        assert!(screen.contains("₹ 20000.00"));
        assert!(screen.contains("₹ 1800.00"));
        assert!(screen.contains("Salary"));
        assert!(screen.contains("-₹ 1500"));
        assert!(screen.contains("+₹ 20000"));
    }

    #[test]
    fn test_renders_empty_history_hint() {
        let settings = Settings {
            seed_sample_data: false,
            ..Settings::default()
        };
        let screen = draw(&App::new(&settings));

        assert!(screen.contains("No transactions"));
        assert!(screen.contains("₹ 0.00"));
    }

    #[test]
    fn test_renders_alert() {
        let mut app = App::new(&Settings::default());
        app.submit_form();

        let screen = draw(&app);
        assert!(screen.contains("Please enter a description and amount"));
    }

    #[test]
    fn test_theme_toggle_label() {
        let mut app = App::new(&Settings::default());
        assert!(draw(&app).contains("Light [t]"));

        app.toggle_theme();
        assert!(draw(&app).contains("Dark [t]"));
    }

    #[test]
    fn test_renders_long_amount_in_full() {
        let mut app = App::new(&Settings::default());
        app.add_transaction("Loan", "-12345678901234").unwrap();

        let screen = draw(&app);
        assert!(screen.contains("-₹ 12345678901234"));
    }

    #[test]
    fn test_renders_nan_balance() {
        let mut app = App::new(&Settings::default());
        app.add_transaction("Rent", "-abc").unwrap();

        let screen = draw(&app);
        assert!(screen.contains("₹ NaN"));
        assert!(screen.contains("+₹ NaN"));
    }
}
