//! Ledger core
//!
//! The transaction list, its two mutations, and the totals derived from it.

pub mod aggregates;
pub mod book;
pub mod sample;

pub use aggregates::{compute_aggregates, Aggregates};
pub use book::{Ledger, LedgerState};
pub use sample::sample_transactions;
