//! Input loaders for goal and transaction snapshots
//!
//! Goals arrive as a JSON array. Transactions arrive as JSON or as CSV with a
//! header row; CSV columns are matched by name, in any order:
//!
//! ```text
//! date,description,amount,kind
//! 2026-10-01,PAYROLL,3200.00,income
//! 2026-10-03,RENT,1400.00,expense
//! ```
//!
//! When the `kind` column is absent or blank, the amount's sign decides:
//! negative is income, anything else is expense.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Goal, Transaction, TransactionKind};

/// Parse a JSON array of goals
pub fn parse_goals_json<R: Read>(reader: R) -> Result<Vec<Goal>> {
    let goals: Vec<Goal> = serde_json::from_reader(reader)?;
    debug!(count = goals.len(), "Parsed goals");
    Ok(goals)
}

/// Parse a JSON array of transactions
pub fn parse_transactions_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
    debug!(count = transactions.len(), "Parsed transactions");
    Ok(transactions)
}

/// Column positions resolved from the CSV header
struct Columns {
    date: usize,
    amount: usize,
    description: Option<usize>,
    kind: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Ok(Self {
            date: find("date").ok_or_else(|| Error::InvalidData("Missing 'date' column".into()))?,
            amount: find("amount")
                .ok_or_else(|| Error::InvalidData("Missing 'amount' column".into()))?,
            description: find("description"),
            kind: find("kind"),
        })
    }
}

/// Parse classified transactions from CSV
pub fn parse_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        let date_str = record
            .get(columns.date)
            .ok_or_else(|| Error::InvalidData(format!("Line {}: missing date", line)))?;
        let date = parse_date(date_str)
            .map_err(|e| Error::InvalidData(format!("Line {}: {}", line, e)))?;

        let amount_str = record
            .get(columns.amount)
            .ok_or_else(|| Error::InvalidData(format!("Line {}: missing amount", line)))?;
        let amount = parse_amount(amount_str)
            .map_err(|e| Error::InvalidData(format!("Line {}: {}", line, e)))?;

        let kind = match columns.kind.and_then(|i| record.get(i)).filter(|s| !s.is_empty()) {
            Some(kind) => kind
                .parse::<TransactionKind>()
                .map_err(|e| Error::InvalidData(format!("Line {}: {}", line, e)))?,
            None if amount < 0.0 => TransactionKind::Income,
            None => TransactionKind::Expense,
        };

        let description = columns
            .description
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        transactions.push(Transaction {
            date,
            description,
            amount: amount.abs(),
            kind,
        });
    }

    debug!(count = transactions.len(), "Parsed transactions CSV");
    Ok(transactions)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2026-01-15
        "%m/%d/%Y", // 01/15/2026
        "%m/%d/%y", // 01/15/26
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::InvalidData(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidData(format!("Unable to parse amount: {}", s))),
    }
}
