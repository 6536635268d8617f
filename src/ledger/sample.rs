//! Sample transactions shown on first launch

use crate::models::{Amount, Transaction, TransactionId};

/// The three starter entries, in display order
pub fn sample_transactions() -> Vec<Transaction> {
    [
        (1, "Salary", 20000.0),
        (2, "Groceries", -1500.0),
        (3, "Movie", -300.0),
    ]
    .into_iter()
    .map(|(id, text, amount)| Transaction::new(TransactionId::new(id), text, Amount::new(amount)))
    .collect()
}
