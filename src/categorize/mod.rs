use crate::models::{Transaction, UNCATEGORIZED};
use crate::store::{CategoryStore, StoreError};

/// Assign a category to every transaction from the store's keyword rules.
///
/// Categories are walked in store insertion order with the transactions as
/// the inner loop, and a match overwrites unconditionally: when two
/// categories share a keyword, the one added later wins. The reserved
/// fallback category never matches, and neither does a category with no
/// keywords yet.
///
/// Matching is exact full-string equality of the lower-cased description
/// against each trimmed, lower-cased keyword; substrings do not match.
pub(crate) fn assign_categories(transactions: &mut [Transaction], store: &CategoryStore) {
    for txn in transactions.iter_mut() {
        txn.category = UNCATEGORIZED.to_string();
    }

    for (name, keywords) in store.iter() {
        if name == UNCATEGORIZED || keywords.is_empty() {
            continue;
        }
        let normalized: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .collect();
        for txn in transactions.iter_mut() {
            let details = txn.description.to_lowercase();
            if normalized.iter().any(|k| *k == details) {
                txn.category = name.to_string();
            }
        }
    }
}

/// Fold the user's manual corrections back into the rule set.
///
/// `original` and `edited` are the same transactions before and after the
/// user edited categories in the hosting view, in the same order. Every
/// changed row updates the transaction's category and records its
/// description as a keyword of the new category, so the correction applies
/// to future statements too. Keywords are only ever added; the old category
/// keeps whatever it had.
pub(crate) fn apply_edits(
    original: &[Transaction],
    edited: &[Transaction],
    store: &mut CategoryStore,
) -> Result<Vec<Transaction>, StoreError> {
    let mut updated = original.to_vec();
    for (txn, after) in updated.iter_mut().zip(edited) {
        if txn.category == after.category {
            continue;
        }
        store.learn_keyword(&after.category, &txn.description)?;
        txn.category = after.category.clone();
    }
    Ok(updated)
}
