//! Domain models for Goalpace
//!
//! Inputs (`Goal`, `Transaction`, `CashFlowSummary`) are snapshots owned by the
//! caller. Everything else is produced fresh by each optimizer run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Opaque identifier, unique per user
    pub id: String,
    /// Display label (not used in computation)
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// A goal is active while it has not reached its target
    pub fn is_active(&self) -> bool {
        self.current_amount < self.target_amount
    }

    pub fn remaining_amount(&self) -> f64 {
        self.target_amount - self.current_amount
    }
}

/// Whether a transaction brought money in or sent it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" => Ok(Self::Income),
            "expense" | "debit" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An already-classified transaction
///
/// Only the magnitude of `amount` matters; direction comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn income(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            description: None,
            amount,
            kind: TransactionKind::Income,
        }
    }

    pub fn expense(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            description: None,
            amount,
            kind: TransactionKind::Expense,
        }
    }
}

/// Monthly income and expenses for the trailing window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
}

impl CashFlowSummary {
    pub fn new(monthly_income: f64, monthly_expenses: f64) -> Self {
        Self {
            monthly_income,
            monthly_expenses,
        }
    }

    /// Income minus expenses; negative when spending exceeds income
    pub fn disposable_income(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }
}

/// An active goal annotated with its scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGoal {
    pub goal: Goal,
    pub remaining_amount: f64,
    /// Days left until the deadline, at least 1
    pub days_until_deadline: i64,
    pub urgency_score: f64,
    pub completion_score: f64,
    pub size_score: f64,
    pub priority_score: f64,
}

/// Suggested contribution for one active goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub goal_id: String,
    pub goal_name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub remaining_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub suggested_monthly_amount: f64,
    pub suggested_weekly_amount: f64,
    /// Largest monthly amount that still finishes exactly at the deadline
    pub pace_cap: f64,
    pub priority_score: f64,
    /// `None` when the goal will never complete at the suggested pace
    pub months_to_complete: Option<f64>,
    /// `None` when the goal will never complete at the suggested pace
    pub estimated_completion_date: Option<NaiveDate>,
    pub on_track: bool,
}

/// Aggregate figures for a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_goals: usize,
    pub monthly_disposable: f64,
    pub monthly_budget: f64,
    pub total_monthly_allocation: f64,
    pub utilization_rate: f64,
    /// Mean months to completion over goals that will complete
    pub average_completion_months: f64,
}

/// Everything a single optimizer run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub generated_on: NaiveDate,
    pub allocations: Vec<Allocation>,
    pub recommendations: Vec<crate::optimizer::Recommendation>,
    pub summary: ReportSummary,
}

impl OptimizationReport {
    /// A report for a run with no active goals
    pub fn empty(generated_on: NaiveDate, monthly_disposable: f64) -> Self {
        Self {
            generated_on,
            allocations: vec![],
            recommendations: vec![],
            summary: ReportSummary {
                monthly_disposable,
                ..Default::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
