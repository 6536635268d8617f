//! Display formatting for terminal output
//!
//! Shared by the TUI and the `summary` command.

pub mod amount;
pub mod transaction;

pub use amount::{currency_fixed, format_fixed, format_number, signed_amount};
pub use transaction::{format_history, format_ledger, format_totals, LedgerReport};
