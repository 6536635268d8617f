//! Terminal User Interface module
//!
//! A single ledger view built on ratatui: balance and income/expense totals,
//! the add-transaction form, and the newest-first history list.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout and styling
pub mod layout;
pub mod theme;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
