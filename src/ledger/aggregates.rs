//! Balance, income and expense totals
//!
//! Pure functions of the transaction list, recomputed on every render.

use serde::Serialize;

use crate::models::Transaction;

/// Totals derived from a list of transactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Aggregates {
    /// Sum of every amount
    pub balance: f64,
    /// Sum of positive amounts
    pub income: f64,
    /// Sum of negative amounts (never positive)
    pub expense: f64,
}

impl Aggregates {
    /// Expense as a magnitude, for display
    pub fn expense_magnitude(&self) -> f64 {
        self.expense.abs()
    }
}

/// Compute the totals for `transactions`
///
/// Zero amounts land in neither income nor expense. NaN amounts do the same,
/// but still poison the balance.
pub fn compute_aggregates(transactions: &[Transaction]) -> Aggregates {
    transactions
        .iter()
        .map(|txn| txn.amount)
        .fold(Aggregates::default(), |mut totals, amount| {
            totals.balance += amount.value();
            if amount.is_income() {
                totals.income += amount.value();
            } else if amount.is_expense() {
                totals.expense += amount.value();
            }
            totals
        })
}
