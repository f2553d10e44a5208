//! Input validation
//!
//! The optimizer assumes well-formed input. Callers run these checks at the
//! boundary so malformed snapshots fail with a descriptive error instead of
//! producing nonsense allocations.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{CashFlowSummary, Goal, Transaction};

/// Validate a goal snapshot
///
/// Goals that already reached their target are valid (they are simply not
/// active); goals with impossible amounts or duplicate ids are not.
pub fn validate_goals(goals: &[Goal]) -> Result<()> {
    let mut seen = HashSet::new();

    for goal in goals {
        if goal.id.trim().is_empty() {
            return Err(Error::Validation(format!(
                "goal '{}' has an empty id",
                goal.name
            )));
        }
        if !seen.insert(goal.id.as_str()) {
            return Err(Error::Validation(format!("duplicate goal id '{}'", goal.id)));
        }
        if !goal.target_amount.is_finite() || goal.target_amount <= 0.0 {
            return Err(Error::Validation(format!(
                "goal '{}' target_amount must be positive, got {}",
                goal.id, goal.target_amount
            )));
        }
        if !goal.current_amount.is_finite() || goal.current_amount < 0.0 {
            return Err(Error::Validation(format!(
                "goal '{}' current_amount must be non-negative, got {}",
                goal.id, goal.current_amount
            )));
        }
    }

    Ok(())
}

/// Validate pre-aggregated cash flow figures
pub fn validate_cash_flow(cash_flow: &CashFlowSummary) -> Result<()> {
    for (name, value) in [
        ("monthly_income", cash_flow.monthly_income),
        ("monthly_expenses", cash_flow.monthly_expenses),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Validation(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

/// Validate raw transactions before summarizing them
pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    if let Some(tx) = transactions.iter().find(|tx| !tx.amount.is_finite()) {
        return Err(Error::Validation(format!(
            "transaction on {} has a non-finite amount",
            tx.date
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_valid_goals() {
        let goals = vec![
            Goal::new("a", "Emergency fund", 5000.0, 1200.0),
            Goal::new("b", "Vacation", 2000.0, 2000.0),
        ];
        assert!(validate_goals(&goals).is_ok());
        assert!(validate_goals(&[]).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let err = validate_goals(&[Goal::new("a", "Bad", 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("target_amount"));

        assert!(validate_goals(&[Goal::new("a", "Bad", -100.0, 0.0)]).is_err());
        assert!(validate_goals(&[Goal::new("a", "Bad", f64::NAN, 0.0)]).is_err());
    }

    #[test]
    fn test_rejects_negative_current() {
        let err = validate_goals(&[Goal::new("a", "Bad", 100.0, -5.0)]).unwrap_err();
        assert!(err.to_string().contains("current_amount"));
    }

    #[test]
    fn test_rejects_duplicate_and_empty_ids() {
        let goals = vec![
            Goal::new("a", "One", 100.0, 0.0),
            Goal::new("a", "Two", 200.0, 0.0),
        ];
        let err = validate_goals(&goals).unwrap_err();
        assert!(err.to_string().contains("duplicate"));

        assert!(validate_goals(&[Goal::new("  ", "Blank", 100.0, 0.0)]).is_err());
    }

    #[test]
    fn test_cash_flow_validation() {
        assert!(validate_cash_flow(&CashFlowSummary::new(3000.0, 3500.0)).is_ok());
        assert!(validate_cash_flow(&CashFlowSummary::new(-1.0, 0.0)).is_err());
        assert!(validate_cash_flow(&CashFlowSummary::new(100.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_transaction_validation() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert!(validate_transactions(&[Transaction::income(date, 100.0)]).is_ok());
        assert!(validate_transactions(&[Transaction::expense(date, f64::NAN)]).is_err());
    }
}
