use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Direction, Transaction};

/// Date format used by the statement export, e.g. "05 Jan 2024".
const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: could not parse amount '{value}'")]
    BadAmount { row: usize, value: String },
    #[error("row {row}: could not parse date '{value}' (expected DD Mon YYYY)")]
    BadDate { row: usize, value: String },
    #[error("could not read CSV input")]
    Read(#[from] csv::Error),
}

/// Positions of the required statement columns, resolved from the header row.
struct ColumnLayout {
    date: usize,
    details: usize,
    amount: usize,
    direction: usize,
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, ParseError> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let find = |candidates: &[&str], label: &'static str| {
            names
                .iter()
                .position(|n| candidates.contains(&n.as_str()))
                .ok_or(ParseError::MissingColumn(label))
        };

        Ok(Self {
            date: find(&["date"], "Date")?,
            details: find(&["details", "description"], "Details")?,
            amount: find(&["amount"], "Amount")?,
            direction: find(&["debit/credit"], "Debit/Credit")?,
        })
    }
}

/// Parse a statement export into transactions. The whole parse fails on the
/// first malformed row; there is no partial recovery.
pub(crate) fn parse<R: Read>(input: R) -> Result<Vec<Transaction>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);
    let layout = ColumnLayout::resolve(rdr.headers()?)?;

    let mut transactions = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based data row number, counting the header as row 1.
        let row = i + 2;

        let date_raw = record.get(layout.date).unwrap_or("").trim();
        let date = parse_date(date_raw).ok_or_else(|| ParseError::BadDate {
            row,
            value: date_raw.to_string(),
        })?;

        let amount_raw = record.get(layout.amount).unwrap_or("").trim();
        let amount = parse_amount(amount_raw).ok_or_else(|| ParseError::BadAmount {
            row,
            value: amount_raw.to_string(),
        })?;

        // Description text is kept verbatim; matching normalizes later.
        let description = record.get(layout.details).unwrap_or("").to_string();
        let direction = Direction::parse(record.get(layout.direction).unwrap_or(""));

        transactions.push(Transaction::new(date, description, amount, direction));
    }

    Ok(transactions)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Amounts may carry comma grouping separators ("1,234.56"); strip them
/// before decimal parsing.
fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    Decimal::from_str(cleaned.trim()).ok()
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
