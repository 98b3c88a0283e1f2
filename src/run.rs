use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::categorize;
use crate::import;
use crate::models::Transaction;
use crate::store::CategoryStore;
use crate::summary;

pub(crate) fn as_cli(args: &[String], store: &mut CategoryStore) -> Result<()> {
    match args[1].as_str() {
        "report" | "r" => cmd_report(&args[2..], store),
        "categories" => cmd_categories(store),
        "add-category" => cmd_add_category(&args[2..], store),
        "assign" => cmd_assign(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendlens {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("SpendLens — local-only spending categorizer for bank CSV exports");
    println!();
    println!("Usage: spendlens <command>");
    println!();
    println!("Commands:");
    println!("  report <file.csv>                 Categorize a statement and print the summary");
    println!("  categories                        List categories and their keywords");
    println!("  add-category <name>               Create a new category");
    println!("  assign <file.csv> <row> <category>");
    println!("                                    Reassign one row; the description is learned");
    println!("                                    as a keyword of the new category");
    println!("  --help, -h                        Show this help");
    println!("  --version, -V                     Show version");
}

fn cmd_report(args: &[String], store: &CategoryStore) -> Result<()> {
    let Some(file) = args.first() else {
        anyhow::bail!("Usage: spendlens report <file.csv>");
    };
    let txns = load_statement(file, store)?;
    if txns.is_empty() {
        println!("No transactions in {file}");
        return Ok(());
    }

    print_transactions(&txns);

    let expenses = summary::debits(&txns);
    let payments = summary::credits(&txns);
    let by_category = summary::spending_by_category(&expenses);

    println!();
    println!("Expenses by Category:");
    for (name, total) in &by_category {
        println!("  {name:<24} {:>12}", format_amount(*total));
    }
    println!("{}", "─".repeat(40));
    println!(
        "  {:<24} {:>12}",
        format!("Total Expenses ({})", expenses.len()),
        format_amount(summary::total_expenses(&txns))
    );
    println!(
        "  {:<24} {:>12}",
        format!("Total Payments ({})", payments.len()),
        format_amount(summary::total_payments(&txns))
    );
    Ok(())
}

fn cmd_categories(store: &CategoryStore) -> Result<()> {
    println!("{:<24} Keywords", "Category");
    println!("{}", "─".repeat(60));
    for (name, keywords) in store.iter() {
        if keywords.is_empty() {
            println!("{name:<24} —");
        } else {
            println!("{name:<24} {}", keywords.join(", "));
        }
    }
    println!();
    println!("{} categories", store.len());
    Ok(())
}

fn cmd_add_category(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let Some(name) = args.first() else {
        anyhow::bail!("Usage: spendlens add-category <name>");
    };
    if store
        .create_category(name)
        .context("Failed to save category store")?
    {
        println!("Added category '{name}'");
    } else {
        println!("Category '{name}' already exists");
    }
    Ok(())
}

fn cmd_assign(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let (Some(file), Some(row_arg), Some(category)) = (args.first(), args.get(1), args.get(2))
    else {
        anyhow::bail!("Usage: spendlens assign <file.csv> <row> <category>");
    };
    let row: usize = row_arg
        .parse()
        .with_context(|| format!("Invalid row number '{row_arg}'"))?;

    // Only existing categories are offered for reassignment.
    if !store.contains(category) {
        anyhow::bail!(
            "Unknown category '{category}'. Run 'spendlens categories' to list them, \
             or add it with 'spendlens add-category'"
        );
    }

    let original = load_statement(file, store)?;
    if row == 0 || row > original.len() {
        anyhow::bail!("Row {row} is out of range (statement has {} rows)", original.len());
    }

    let mut edited = original.clone();
    edited[row - 1].category = category.to_string();

    let updated = categorize::apply_edits(&original, &edited, store)
        .context("Failed to apply reassignment")?;
    let txn = &updated[row - 1];
    let rules = store.keywords(category).map_or(0, <[String]>::len);
    println!(
        "Reassigned '{}' to '{category}' and learned it for future statements \
         ({category} now has {rules} keyword rules)",
        txn.description.trim()
    );
    Ok(())
}

fn load_statement(file: &str, store: &CategoryStore) -> Result<Vec<Transaction>> {
    let path = Path::new(file);
    let input =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut txns = import::parse(input)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    categorize::assign_categories(&mut txns, store);
    Ok(txns)
}

fn print_transactions(txns: &[Transaction]) {
    println!(
        "{:<4} {:<12} {:<32} {:>12} {:<7} Category",
        "Row", "Date", "Description", "Amount", "Type"
    );
    println!("{}", "─".repeat(90));
    for (i, txn) in txns.iter().enumerate() {
        println!(
            "{:<4} {:<12} {:<32} {:>12} {:<7} {}",
            i + 1,
            txn.date.format("%d %b %Y"),
            truncate(txn.description.trim(), 32),
            format_amount(txn.amount),
            txn.direction,
            txn.category,
        );
    }
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
