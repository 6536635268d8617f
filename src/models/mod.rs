//! Core data models for the expense tracker

pub mod amount;
pub mod ids;
pub mod transaction;

pub use amount::Amount;
pub use ids::{IdGenerator, TransactionId};
pub use transaction::Transaction;
