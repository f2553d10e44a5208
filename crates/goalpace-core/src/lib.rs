//! Goalpace Core Library
//!
//! Savings goal allocation for personal budgets:
//! - Goal and transaction models
//! - CSV/JSON loaders for goal snapshots and transaction history
//! - Boundary validation
//! - The allocation optimizer (scoring, distribution, projection,
//!   recommendations)
//! - Layered optimizer policy config

pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod optimizer;
pub mod validate;

pub use config::{
    AllocationPolicy, CashFlowPolicy, OptimizerConfig, RecommendationPolicy, ScoringPolicy,
};
pub use error::{Error, Result};
pub use import::{parse_goals_json, parse_transactions_csv, parse_transactions_json};
pub use models::{
    Allocation, CashFlowSummary, Goal, OptimizationReport, ReportSummary, ScoredGoal, Transaction,
    TransactionKind,
};
pub use optimizer::{Optimizer, Recommendation, RecommendationPriority, RecommendationType};
pub use validate::{validate_cash_flow, validate_goals, validate_transactions};
