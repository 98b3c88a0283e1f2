mod transaction;

pub use transaction::{Direction, Transaction};

/// Reserved fallback category. Always present in the store; never matched
/// against keywords.
pub const UNCATEGORIZED: &str = "Uncategorized";
