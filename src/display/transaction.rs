//! Transaction display formatting
//!
//! Plain-text and JSON renderings of the ledger for the `summary` command.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::amount::{currency_fixed, signed_amount};
use crate::ledger::{Aggregates, Ledger};
use crate::models::Transaction;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    text: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Added")]
    added: String,
}

impl HistoryRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            text: txn.text.clone(),
            amount: signed_amount(symbol, txn.amount),
            added: txn
                .created_at
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string(),
        }
    }
}

/// Format the history as a table, newest first
pub fn format_history(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions.\n".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .map(|txn| HistoryRow::new(txn, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format balance, income and expense
pub fn format_totals(totals: &Aggregates, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Balance: {}\n",
        currency_fixed(symbol, totals.balance)
    ));
    output.push_str(&format!("Income:  {}\n", currency_fixed(symbol, totals.income)));
    output.push_str(&format!(
        "Expense: {}\n",
        currency_fixed(symbol, totals.expense_magnitude())
    ));
    output
}

/// Format the whole ledger: history table followed by totals
pub fn format_ledger(ledger: &Ledger, symbol: &str) -> String {
    let mut output = format_history(ledger.transactions(), symbol);
    output.push('\n');
    output.push_str(&format_totals(&ledger.aggregates(), symbol));
    output
}

/// JSON shape of the `summary --json` output
#[derive(Debug, Serialize)]
pub struct LedgerReport<'a> {
    pub transactions: &'a [Transaction],
    pub totals: Aggregates,
}

impl<'a> LedgerReport<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self {
            transactions: ledger.transactions(),
            totals: ledger.aggregates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_rows() {
        let ledger = Ledger::with_sample_data();
        let output = format_history(ledger.transactions(), "₹");

        assert!(output.contains("Description"));
        assert!(output.contains("Salary"));
        assert!(output.contains("+₹ 20000"));
        assert!(output.contains("-₹ 1500"));

        let salary = output.find("Salary").unwrap();
        let movie = output.find("Movie").unwrap();
        assert!(salary < movie);
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[], "₹"), "No transactions.\n");
    }

    #[test]
    fn test_format_totals() {
        let ledger = Ledger::with_sample_data();
        let output = format_totals(&ledger.aggregates(), "₹");

        assert!(output.contains("Balance: ₹ 18200.00"));
        assert!(output.contains("Income:  ₹ 20000.00"));
        assert!(output.contains("Expense: ₹ 1800.00"));
    }

    #[test]
    fn test_report_json() {
        let mut ledger = Ledger::with_sample_data();
        ledger.add("Freelance", "5000").unwrap();

        let json = serde_json::to_value(LedgerReport::new(&ledger)).unwrap();
        assert_eq!(json["transactions"][0]["text"], "Freelance");
        assert_eq!(json["totals"]["balance"], 23200.0);
    }
}
