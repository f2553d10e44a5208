//! Input loading shared by commands

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use goalpace_core::import::{parse_goals_json, parse_transactions_csv, parse_transactions_json};
use goalpace_core::{CashFlowSummary, Goal, Optimizer, Transaction};

/// Where an optimize run gets its cash flow from
#[derive(Debug, Clone, PartialEq)]
pub enum CashSource {
    /// Transactions file, summarized over the trailing window
    Transactions(PathBuf),
    /// Monthly figures given directly
    Figures(CashFlowSummary),
}

impl CashSource {
    pub fn from_args(
        transactions: Option<&Path>,
        income: Option<f64>,
        expenses: Option<f64>,
    ) -> Result<Self> {
        match (transactions, income) {
            (Some(path), None) => Ok(Self::Transactions(path.to_path_buf())),
            (None, Some(income)) => Ok(Self::Figures(CashFlowSummary::new(
                income,
                expenses.unwrap_or(0.0),
            ))),
            (Some(_), Some(_)) => anyhow::bail!("Use either --transactions or --income, not both"),
            (None, None) => anyhow::bail!("Provide --transactions FILE or --income AMOUNT"),
        }
    }
}

/// Load the optimizer policy from `--config` or the default locations
pub fn load_optimizer(config: Option<&Path>) -> Result<Optimizer> {
    Optimizer::load(config).context("Failed to load optimizer config")
}

/// Resolve `--today`, defaulting to the current UTC date
pub fn parse_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(Utc::now().date_naive()),
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub fn load_goals(path: &Path) -> Result<Vec<Goal>> {
    parse_goals_json(open(path)?)
        .with_context(|| format!("Failed to parse goals from {}", path.display()))
}

/// Load transactions, choosing the format by file extension
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let reader = open(path)?;
    let transactions = if is_json {
        parse_transactions_json(reader)
    } else {
        parse_transactions_csv(reader)
    };

    transactions.with_context(|| format!("Failed to parse transactions from {}", path.display()))
}
