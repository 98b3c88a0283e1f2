#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Direction, UNCATEGORIZED};
use rust_decimal_macros::dec;

fn parse_str(csv: &str) -> Result<Vec<crate::models::Transaction>, ParseError> {
    parse(csv.as_bytes())
}

// ── Header resolution ─────────────────────────────────────────

#[test]
fn test_parse_basic_statement() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,Carrefour,45.90,Debit\n\
               06 Jan 2024,Salary,3000.00,Credit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(
        txns[0].date,
        chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
    assert_eq!(txns[0].description, "Carrefour");
    assert_eq!(txns[0].amount, dec!(45.90));
    assert_eq!(txns[0].direction, Direction::Debit);
    assert_eq!(txns[1].direction, Direction::Credit);
}

#[test]
fn test_headers_case_and_whitespace_insensitive() {
    let csv = " DATE , details ,AMOUNT, Debit/Credit \n\
               05 Jan 2024,Coffee,4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].description, "Coffee");
}

#[test]
fn test_description_column_accepted() {
    let csv = "Date,Description,Amount,Debit/Credit\n\
               05 Jan 2024,Coffee,4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].description, "Coffee");
}

#[test]
fn test_column_order_irrelevant() {
    let csv = "Amount,Debit/Credit,Date,Details\n\
               4.50,Debit,05 Jan 2024,Coffee\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].amount, dec!(4.50));
    assert_eq!(txns[0].description, "Coffee");
}

#[test]
fn test_missing_column_fails() {
    let csv = "Date,Details,Amount\n05 Jan 2024,Coffee,4.50\n";
    let err = parse_str(csv).unwrap_err();
    assert!(matches!(err, ParseError::MissingColumn("Debit/Credit")));
}

#[test]
fn test_missing_details_column_fails() {
    let csv = "Date,Amount,Debit/Credit\n05 Jan 2024,4.50,Debit\n";
    let err = parse_str(csv).unwrap_err();
    assert!(matches!(err, ParseError::MissingColumn("Details")));
}

// ── Amounts ───────────────────────────────────────────────────

#[test]
fn test_amount_with_grouping_commas() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,Rent,\"1,250.00\",Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].amount, dec!(1250.00));
}

#[test]
fn test_bad_amount_aborts_whole_parse() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,Coffee,4.50,Debit\n\
               06 Jan 2024,Broken,abc,Debit\n";
    let err = parse_str(csv).unwrap_err();
    match err {
        ParseError::BadAmount { row, value } => {
            assert_eq!(row, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Dates ─────────────────────────────────────────────────────

#[test]
fn test_bad_date_aborts_whole_parse() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               2024-01-05,Coffee,4.50,Debit\n";
    let err = parse_str(csv).unwrap_err();
    assert!(matches!(err, ParseError::BadDate { row: 2, .. }));
}

#[test]
fn test_date_value_is_trimmed() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               \" 05 Jan 2024 \",Coffee,4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(
        txns[0].date,
        chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
}

// ── Direction ─────────────────────────────────────────────────

#[test]
fn test_unknown_direction_passes_through() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,Transfer,100.00,Internal\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].direction, Direction::Other);
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_rows_start_uncategorized() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,Coffee,4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].category, UNCATEGORIZED);
}

#[test]
fn test_description_kept_verbatim() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,\"  Spaced  Out  \",4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].description, "  Spaced  Out  ");
}

#[test]
fn test_quoted_description_with_comma() {
    let csv = "Date,Details,Amount,Debit/Credit\n\
               05 Jan 2024,\"Cafe, Downtown\",4.50,Debit\n";
    let txns = parse_str(csv).unwrap();
    assert_eq!(txns[0].description, "Cafe, Downtown");
}

#[test]
fn test_empty_input_has_no_transactions() {
    let csv = "Date,Details,Amount,Debit/Credit\n";
    let txns = parse_str(csv).unwrap();
    assert!(txns.is_empty());
}
