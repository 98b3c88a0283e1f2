use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::UNCATEGORIZED;

/// One row of a bank statement export. Everything except `category` is fixed
/// at parse time; `category` is rewritten by categorization passes and by
/// manual reassignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub category: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: String,
        amount: Decimal,
        direction: Direction,
    ) -> Self {
        Self {
            date,
            description,
            amount,
            direction,
            category: UNCATEGORIZED.to_string(),
        }
    }

    pub fn is_debit(&self) -> bool {
        self.direction == Direction::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.direction == Direction::Credit
    }
}

/// Statement direction flag. Exports mark each row with the literal string
/// "Debit" or "Credit"; anything else is carried through as `Other` and
/// belongs to neither subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Debit,
    Credit,
    Other,
}

impl Direction {
    pub fn parse(s: &str) -> Self {
        match s {
            "Debit" => Direction::Debit,
            "Credit" => Direction::Credit,
            _ => Direction::Other,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Debit => write!(f, "Debit"),
            Direction::Credit => write!(f, "Credit"),
            Direction::Other => write!(f, "Other"),
        }
    }
}
