//! Application state for the TUI
//!
//! `App` is the ledger view: it owns the ledger, the draft form and the
//! display mode, plus the navigation state needed to render and route keys.
//! The ledger itself is private; callers go through the operations below.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{Settings, ThemeMode};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::{Aggregates, Ledger, LedgerState};
use crate::models::{Transaction, TransactionId};

use super::theme::Palette;
use super::views::form::TransactionFormState;
use super::widgets::{ErrorInfo, Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Form,
    #[default]
    History,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Alert(ErrorInfo),
}

/// Main application state
pub struct App {
    ledger: Ledger,

    theme: ThemeMode,

    /// Literal prefix for amounts
    pub currency_symbol: String,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Draft description and amount
    pub form: TransactionFormState,

    /// Selected row in the history list
    pub selected_index: usize,

    pub notifications: NotificationQueue,

    notification_ttl: Duration,
}

impl App {
    /// Create the app with the ledger the settings ask for
    pub fn new(settings: &Settings) -> Self {
        let ledger = if settings.seed_sample_data {
            Ledger::with_sample_data()
        } else {
            Ledger::new()
        };
        Self::with_ledger(ledger, settings)
    }

    /// Create the app around an existing ledger
    pub fn with_ledger(ledger: Ledger, settings: &Settings) -> Self {
        Self {
            ledger,
            theme: settings.theme,
            currency_symbol: settings.currency_symbol.clone(),
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            form: TransactionFormState::new(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
            notification_ttl: Duration::from_secs(settings.notification_secs),
        }
    }

    /// Transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Totals for the current list
    pub fn aggregates(&self) -> Aggregates {
        self.ledger.aggregates()
    }

    pub fn ledger_state(&self) -> LedgerState {
        self.ledger.state()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.theme)
    }

    /// Add a transaction and select it
    ///
    /// # Errors
    ///
    /// Propagates the ledger's incomplete-submission error; nothing changes.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> TrackerResult<TransactionId> {
        let id = self.ledger.add(description, amount_text)?.id;
        self.selected_index = 0;
        Ok(id)
    }

    /// Submit the draft form
    ///
    /// On success the draft is cleared and a toast confirms the entry. On
    /// failure the draft is kept and a blocking alert explains what's missing.
    pub fn submit_form(&mut self) -> bool {
        let description = self.form.description.value().to_string();
        let amount = self.form.amount.value().to_string();

        match self.add_transaction(&description, &amount) {
            Ok(_) => {
                self.form.clear();
                self.notify(Notification::success(
                    format!("Added \"{}\"", description),
                    self.notification_ttl,
                ));
                true
            }
            Err(err) => {
                self.report_error(&err);
                false
            }
        }
    }

    /// Delete a transaction by id; absent ids are ignored
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let removed = self.ledger.delete(id);
        self.clamp_selection();
        if let Some(txn) = &removed {
            self.notify(Notification::success(
                format!("Deleted \"{}\"", txn.text),
                self.notification_ttl,
            ));
        }
        removed.is_some()
    }

    /// Delete the selected history row
    pub fn delete_selected(&mut self) -> bool {
        match self.selected_transaction().map(|txn| txn.id) {
            Some(id) => self.delete_transaction(id),
            None => false,
        }
    }

    /// The transaction under the history cursor
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions().get(self.selected_index)
    }

    /// Flip between dark and light mode
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme toggled");
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show an error in a blocking alert
    pub fn report_error(&mut self, error: &TrackerError) {
        tracing::warn!(error = %error, "showing error alert");
        self.open_dialog(ActiveDialog::Alert(ErrorInfo::from_error(error)));
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog, keeping the input mode it interrupted
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Focus the form and start typing into it
    pub fn start_editing(&mut self) {
        self.focused_panel = FocusedPanel::Form;
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Toggle focus between the form and the history list
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::History,
            FocusedPanel::History => FocusedPanel::Form,
        };
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.ledger.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.ledger.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let last = self.ledger.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping: expire old toasts
    pub fn tick(&mut self) {
        self.notifications.remove_expired_at(Instant::now());
    }
}
