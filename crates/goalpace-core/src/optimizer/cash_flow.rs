//! Cash-flow summarizer
//!
//! Reduces classified transactions to monthly income and expense totals over
//! a trailing window ending on `today`.

use chrono::{Duration, NaiveDate};

use crate::config::CashFlowPolicy;
use crate::models::{CashFlowSummary, Transaction, TransactionKind};

/// Sum income and expense magnitudes inside the trailing window
///
/// The window is `[today - window_days, today]`, inclusive on both ends.
/// Future-dated transactions are ignored. A window reaching past the
/// calendar's start covers every earlier transaction.
pub fn summarize_cash_flow(
    transactions: &[Transaction],
    today: NaiveDate,
    policy: &CashFlowPolicy,
) -> CashFlowSummary {
    let start = today
        .checked_sub_signed(Duration::days(policy.window_days as i64))
        .unwrap_or(NaiveDate::MIN);

    let mut summary = CashFlowSummary::default();
    let mut counted = 0usize;

    for tx in transactions
        .iter()
        .filter(|tx| tx.date >= start && tx.date <= today)
    {
        match tx.kind {
            TransactionKind::Income => summary.monthly_income += tx.amount.abs(),
            TransactionKind::Expense => summary.monthly_expenses += tx.amount.abs(),
        }
        counted += 1;
    }

    tracing::debug!(
        counted,
        total = transactions.len(),
        income = summary.monthly_income,
        expenses = summary.monthly_expenses,
        "Cash flow summarized"
    );

    summary
}
