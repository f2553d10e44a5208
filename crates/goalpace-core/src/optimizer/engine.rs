//! Optimizer entry point
//!
//! Wires the five stages together: cash flow → scoring → distribution →
//! projection → recommendations. `optimize` itself is pure; the `*_checked`
//! and `optimize_transactions` variants validate their input first.

use std::path::Path;

use chrono::NaiveDate;

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::models::{
    Allocation, CashFlowSummary, Goal, OptimizationReport, ReportSummary, Transaction,
};
use crate::validate::{validate_cash_flow, validate_goals, validate_transactions};

use super::allocation::distribute;
use super::cash_flow::summarize_cash_flow;
use super::projection::project_completion;
use super::recommendations::{utilization_rate, RecommendationContext, RecommendationEngine};
use super::scoring::score_goals;

/// Goal allocation optimizer
///
/// Holds only configuration; every call is independent, so one instance can
/// be shared across threads.
pub struct Optimizer {
    config: OptimizerConfig,
    recommendations: RecommendationEngine,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Optimizer with the built-in policy
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            config,
            recommendations: RecommendationEngine::new(),
        }
    }

    /// Optimizer using config resolved by [`OptimizerConfig::load`]
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self::with_config(OptimizerConfig::load(config_path)?))
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Reduce transactions to monthly cash flow using the configured window
    pub fn summarize(&self, transactions: &[Transaction], today: NaiveDate) -> CashFlowSummary {
        summarize_cash_flow(transactions, today, &self.config.cash_flow)
    }

    /// Produce a report for a goal snapshot
    ///
    /// Assumes validated input. Never fails: no active goals or no disposable
    /// income produce a degenerate report rather than an error.
    pub fn optimize(
        &self,
        goals: &[Goal],
        cash_flow: &CashFlowSummary,
        today: NaiveDate,
    ) -> OptimizationReport {
        let monthly_disposable = cash_flow.disposable_income();
        let scored = score_goals(goals, today, &self.config.scoring);

        if scored.is_empty() {
            tracing::debug!("No active goals to optimize");
            return OptimizationReport::empty(today, monthly_disposable);
        }

        let distribution = distribute(
            &scored,
            monthly_disposable,
            &self.config.allocation,
            &self.config.scoring,
        );
        let budget = distribution.budget;

        let allocations: Vec<Allocation> = distribution
            .shares
            .into_iter()
            .map(|share| {
                let goal = share.goal.goal;
                let projection = project_completion(
                    share.goal.remaining_amount,
                    share.suggested_monthly_amount,
                    goal.deadline,
                    today,
                );

                Allocation {
                    goal_id: goal.id,
                    goal_name: goal.name,
                    current_amount: goal.current_amount,
                    target_amount: goal.target_amount,
                    remaining_amount: share.goal.remaining_amount,
                    deadline: goal.deadline,
                    suggested_monthly_amount: share.suggested_monthly_amount,
                    suggested_weekly_amount: share.suggested_weekly_amount,
                    pace_cap: share.pace_cap,
                    priority_score: share.goal.priority_score,
                    months_to_complete: projection.months_to_complete,
                    estimated_completion_date: projection.estimated_completion_date,
                    on_track: projection.on_track,
                }
            })
            .collect();

        let summary = summarize_report(&allocations, monthly_disposable, budget);

        let recommendations = self.recommendations.generate(&RecommendationContext::new(
            &allocations,
            budget,
            &self.config.recommendations,
        ));

        tracing::info!(
            goals = summary.total_goals,
            budget,
            allocated = summary.total_monthly_allocation,
            recommendations = recommendations.len(),
            "Optimization complete"
        );

        OptimizationReport {
            generated_on: today,
            allocations,
            recommendations,
            summary,
        }
    }

    /// Validate goals and cash flow, then optimize
    pub fn optimize_checked(
        &self,
        goals: &[Goal],
        cash_flow: &CashFlowSummary,
        today: NaiveDate,
    ) -> Result<OptimizationReport> {
        validate_goals(goals)?;
        validate_cash_flow(cash_flow)?;
        Ok(self.optimize(goals, cash_flow, today))
    }

    /// Validate, summarize transactions, then optimize
    pub fn optimize_transactions(
        &self,
        goals: &[Goal],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Result<OptimizationReport> {
        validate_goals(goals)?;
        validate_transactions(transactions)?;
        let cash_flow = self.summarize(transactions, today);
        Ok(self.optimize(goals, &cash_flow, today))
    }
}

fn summarize_report(allocations: &[Allocation], monthly_disposable: f64, budget: f64) -> ReportSummary {
    let total_monthly_allocation: f64 = allocations
        .iter()
        .map(|a| a.suggested_monthly_amount)
        .sum();

    let completing: Vec<f64> = allocations
        .iter()
        .filter_map(|a| a.months_to_complete)
        .collect();
    let average_completion_months = if completing.is_empty() {
        0.0
    } else {
        completing.iter().sum::<f64>() / completing.len() as f64
    };

    ReportSummary {
        total_goals: allocations.len(),
        monthly_disposable,
        monthly_budget: budget,
        total_monthly_allocation,
        utilization_rate: utilization_rate(total_monthly_allocation, budget),
        average_completion_months,
    }
}
