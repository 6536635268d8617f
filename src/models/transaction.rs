//! Transaction model
//!
//! A named, signed amount. Transactions are only validated when they are
//! created; see [`crate::ledger::Ledger::add`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::amount::Amount;
use super::ids::TransactionId;

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Human-readable label
    pub text: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Amount,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(id: TransactionId, text: impl Into<String>, amount: Amount) -> Self {
        Self {
            id,
            text: text.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// Check if this transaction is income
    pub fn is_income(&self) -> bool {
        self.amount.is_income()
    }

    /// Check if this transaction is an expense
    pub fn is_expense(&self) -> bool {
        self.amount.is_expense()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(TransactionId::new(1), "Salary", Amount::new(20000.0));
        assert_eq!(txn.text, "Salary");
        assert!(txn.is_income());
        assert!(!txn.is_expense());
    }

    #[test]
    fn test_serialize_nan_amount_as_null() {
        let txn = Transaction::new(TransactionId::new(5), "Rent", Amount::coerce("-abc"));
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["id"], 5);
        assert!(json["amount"].is_null());
    }
}
