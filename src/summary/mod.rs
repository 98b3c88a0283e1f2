use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::Transaction;

/// Per-category totals, largest first; equal totals order by category name
/// so the output is deterministic.
pub(crate) fn spending_by_category(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.category.as_str()).or_default() += txn.amount;
    }

    let mut result: Vec<(String, Decimal)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// Sum of the credit subset ("total payments" in the statement view).
pub(crate) fn total_payments(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_credit())
        .map(|t| t.amount)
        .sum()
}

/// Sum of the debit subset.
pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_debit())
        .map(|t| t.amount)
        .sum()
}

/// Outgoing subset, as its own copy.
pub(crate) fn debits(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_debit())
        .cloned()
        .collect()
}

/// Incoming subset, as its own copy.
pub(crate) fn credits(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_credit())
        .cloned()
        .collect()
}
