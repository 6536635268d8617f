//! The session ledger
//!
//! Owns the transaction list. The list is only reachable read-only from the
//! outside; the only mutations are [`Ledger::add`] and [`Ledger::delete`].

use tracing::{debug, info, warn};

use super::aggregates::{compute_aggregates, Aggregates};
use super::sample::sample_transactions;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, IdGenerator, Transaction, TransactionId};

/// Whether the ledger currently holds anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    HasEntries,
}

/// In-memory list of transactions, newest first
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Create a ledger holding the sample transactions
    pub fn with_sample_data() -> Self {
        let mut ledger = Self::new();
        for txn in sample_transactions() {
            ledger.ids.observe(txn.id);
            ledger.transactions.push(txn);
        }
        ledger
    }

    /// Add a transaction from raw form input
    ///
    /// Both fields only need to be non-empty; whitespace is not trimmed. The
    /// amount text is coerced with [`Amount::coerce`], so text that isn't a
    /// number is stored as NaN rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::IncompleteSubmission`] if either field is
    /// empty. The ledger is left untouched in that case.
    pub fn add(&mut self, description: &str, amount_text: &str) -> TrackerResult<&Transaction> {
        if description.is_empty() || amount_text.is_empty() {
            warn!(
                has_description = !description.is_empty(),
                has_amount = !amount_text.is_empty(),
                "rejected incomplete submission"
            );
            return Err(TrackerError::IncompleteSubmission);
        }

        let amount = Amount::coerce(amount_text);
        if amount.is_nan() {
            debug!(amount_text, "amount did not coerce to a number");
        }

        let txn = Transaction::new(self.ids.next_id(), description, amount);
        info!(id = %txn.id, amount = %txn.amount, "transaction added");
        self.transactions.insert(0, txn);

        Ok(&self.transactions[0])
    }

    /// Remove the transaction with `id`, if present
    ///
    /// Absent ids are ignored.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        match self.position(id) {
            Some(index) => {
                let removed = self.transactions.remove(index);
                info!(id = %id, "transaction deleted");
                Some(removed)
            }
            None => {
                debug!(id = %id, "delete ignored, no such transaction");
                None
            }
        }
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Index of a transaction in display order
    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::HasEntries
        }
    }

    /// Current balance, income and expense
    pub fn aggregates(&self) -> Aggregates {
        compute_aggregates(&self.transactions)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(ledger: &Ledger) -> Vec<&str> {
        ledger.transactions().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_sample_ledger() {
        let ledger = Ledger::with_sample_data();
        assert_eq!(texts(&ledger), vec!["Salary", "Groceries", "Movie"]);
        assert_eq!(ledger.state(), LedgerState::HasEntries);

        let totals = ledger.aggregates();
        assert_eq!(totals.balance, 18200.0);
        assert_eq!(totals.income, 20000.0);
        assert_eq!(totals.expense_magnitude(), 1800.0);
    }

    #[test]
    fn test_add_prepends() {
        let mut ledger = Ledger::with_sample_data();
        let added = ledger.add("Freelance", "5000").unwrap();
        assert_eq!(added.text, "Freelance");
        assert_eq!(added.amount.value(), 5000.0);

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.transactions()[0].text, "Freelance");
        assert_eq!(ledger.aggregates().balance, 23200.0);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut ledger = Ledger::with_sample_data();
        let first = ledger.add("a", "1").unwrap().id;
        let second = ledger.add("b", "2").unwrap().id;

        assert_ne!(first, second);
        assert_eq!(first.value(), 4);
        assert_eq!(second.value(), 5);
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let mut ledger = Ledger::with_sample_data();

        let err = ledger.add("", "100").unwrap_err();
        assert!(err.is_incomplete_submission());
        let err = ledger.add("Coffee", "").unwrap_err();
        assert!(err.is_incomplete_submission());

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.transactions()[0].text, "Salary");
    }

    #[test]
    fn test_add_accepts_whitespace_fields() {
        let mut ledger = Ledger::new();
        let added = ledger.add(" ", " ").unwrap();
        assert_eq!(added.text, " ");
        assert_eq!(added.amount.value(), 0.0);
    }

    #[test]
    fn test_add_non_numeric_amount() {
        let mut ledger = Ledger::with_sample_data();
        let added = ledger.add("Rent", "-abc").unwrap();
        assert!(added.amount.is_nan());

        let totals = ledger.aggregates();
        assert_eq!(ledger.len(), 4);
        assert!(totals.balance.is_nan());
        assert_eq!(totals.income, 20000.0);
    }

    #[test]
    fn test_delete_present() {
        let mut ledger = Ledger::with_sample_data();
        let movie = ledger.transactions()[2].id;

        let removed = ledger.delete(movie).unwrap();
        assert_eq!(removed.text, "Movie");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.get(movie).is_none());

        let totals = ledger.aggregates();
        assert_eq!(totals.balance, 18500.0);
        assert_eq!(totals.expense_magnitude(), 1500.0);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut ledger = Ledger::with_sample_data();
        assert!(ledger.delete(TransactionId::new(999)).is_none());
        assert_eq!(texts(&ledger), vec!["Salary", "Groceries", "Movie"]);
    }

    #[test]
    fn test_state_transitions() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.state(), LedgerState::Empty);

        let id = ledger.add("Tea", "-20").unwrap().id;
        assert_eq!(ledger.state(), LedgerState::HasEntries);

        ledger.delete(id);
        assert_eq!(ledger.state(), LedgerState::Empty);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut ledger = Ledger::new();
        let first = ledger.add("a", "1").unwrap().id;
        ledger.delete(first);
        let second = ledger.add("b", "2").unwrap().id;
        assert_ne!(first, second);
    }
}
