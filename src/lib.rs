//! Expense Tracker - a single-screen terminal ledger
//!
//! This library holds an in-memory list of income and expense transactions
//! and derives balance, income and expense totals from it. The list lives
//! for one session; only preferences are stored on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user preferences
//! - `error`: Custom error types
//! - `models`: Transaction, amount and id types
//! - `ledger`: The transaction list and its aggregates
//! - `display`: Text and table formatting shared by the CLI and TUI
//! - `logging`: Tracing subscriber setup
//! - `tui`: The interactive ledger view
//!
//! # Example
//!
//! ```rust
//! use expense::ledger::Ledger;
//!
//! let mut ledger = Ledger::with_sample_data();
//! ledger.add("Freelance", "5000").unwrap();
//! assert_eq!(ledger.aggregates().balance, 23200.0);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
