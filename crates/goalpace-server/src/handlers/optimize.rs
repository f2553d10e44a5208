//! Optimization handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{AppError, AppState};
use goalpace_core::{
    validate_cash_flow, validate_goals, validate_transactions, CashFlowSummary, Goal,
    OptimizationReport, Transaction,
};

/// Request body for an optimizer run
///
/// Exactly one of `cash_flow` or `transactions` must be present.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub cash_flow: Option<CashFlowSummary>,
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
    /// Reference date (defaults to the current UTC date)
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for a cash-flow summary
#[derive(Debug, Deserialize)]
pub struct CashFlowRequest {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Utc::now().date_naive())
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(&rejection.body_text()))
}

/// POST /api/optimize - Run the optimizer on a goal snapshot
pub async fn optimize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizationReport>, AppError> {
    let req = parse_body(payload)?;
    let today = resolve_today(req.today);

    validate_goals(&req.goals).map_err(AppError::from_core)?;

    let cash_flow = match (req.cash_flow, req.transactions) {
        (Some(cash_flow), None) => {
            validate_cash_flow(&cash_flow).map_err(AppError::from_core)?;
            cash_flow
        }
        (None, Some(transactions)) => {
            validate_transactions(&transactions).map_err(AppError::from_core)?;
            state.optimizer.summarize(&transactions, today)
        }
        (Some(_), Some(_)) => {
            return Err(AppError::bad_request(
                "Provide either cash_flow or transactions, not both",
            ))
        }
        (None, None) => {
            return Err(AppError::bad_request(
                "Either cash_flow or transactions is required",
            ))
        }
    };

    let report = state.optimizer.optimize(&req.goals, &cash_flow, today);

    tracing::debug!(
        goals = req.goals.len(),
        allocations = report.allocations.len(),
        "Optimize request served"
    );

    Ok(Json(report))
}

/// POST /api/cash-flow - Summarize transactions into monthly income/expenses
pub async fn cash_flow(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CashFlowRequest>, JsonRejection>,
) -> Result<Json<CashFlowSummary>, AppError> {
    let req = parse_body(payload)?;
    validate_transactions(&req.transactions).map_err(AppError::from_core)?;

    let summary = state
        .optimizer
        .summarize(&req.transactions, resolve_today(req.today));
    Ok(Json(summary))
}
