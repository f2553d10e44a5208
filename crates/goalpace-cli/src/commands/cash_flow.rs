//! Cash-flow command implementation

use std::path::Path;

use anyhow::{Context, Result};
use goalpace_core::validate_transactions;

use super::{load_optimizer, load_transactions, parse_today};

pub fn cmd_cash_flow(
    config: Option<&Path>,
    transactions_path: &Path,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let optimizer = load_optimizer(config)?;
    let today = parse_today(today)?;

    let transactions = load_transactions(transactions_path)?;
    validate_transactions(&transactions).context("Invalid transactions")?;

    let summary = optimizer.summarize(&transactions, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let window = optimizer.config().cash_flow.window_days;

    println!();
    println!("💰 Cash Flow (last {} days to {})", window, today);
    println!("   ─────────────────────────────");
    println!("   Income:     ${:>10.2}", summary.monthly_income);
    println!("   Expenses:   ${:>10.2}", summary.monthly_expenses);
    println!("   Disposable: ${:>10.2}", summary.disposable_income());
    if summary.disposable_income() <= 0.0 {
        println!();
        println!("   ⚠️  No surplus to put toward goals");
    }
    println!();

    Ok(())
}
