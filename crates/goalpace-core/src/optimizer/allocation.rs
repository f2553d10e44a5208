//! Allocation distributor
//!
//! Splits the monthly goal budget across scored goals in priority order.
//! Each goal is offered its priority share of whatever budget is still left,
//! capped at the pace that would finish it exactly on its deadline. Higher
//! priority goals are served first, so later goals may get less than their
//! raw share once the pool runs low.
//!
//! Guarantees: the total never exceeds the budget, and no goal receives more
//! than its pace cap.

use crate::config::{AllocationPolicy, ScoringPolicy};
use crate::models::ScoredGoal;

use super::scoring::rank_goals;

/// Weeks per month used for the weekly figure
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// A goal's slice of the budget
#[derive(Debug, Clone, PartialEq)]
pub struct GoalShare {
    pub goal: ScoredGoal,
    pub pace_cap: f64,
    pub suggested_monthly_amount: f64,
    pub suggested_weekly_amount: f64,
}

/// Result of distributing a budget
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub budget: f64,
    /// Shares in descending priority order
    pub shares: Vec<GoalShare>,
}

impl Distribution {
    pub fn total_allocated(&self) -> f64 {
        self.shares.iter().map(|s| s.suggested_monthly_amount).sum()
    }
}

/// Monthly amount earmarked for goals; zero when disposable income is not
/// positive
pub fn monthly_budget(disposable_income: f64, policy: &AllocationPolicy) -> f64 {
    disposable_income.max(0.0) * policy.budget_ratio
}

/// Largest monthly contribution that still finishes on the deadline
pub fn pace_cap(goal: &ScoredGoal, policy: &ScoringPolicy) -> f64 {
    goal.remaining_amount / policy.periods(goal.days_until_deadline)
}

/// Distribute the goal budget across scored goals
///
/// Goals may be passed in any order; they are ranked (stably) by priority
/// before the budget is handed out. When the priority total is zero or not
/// finite, each goal's share falls back to `1 / n`.
pub fn distribute(
    scored: &[ScoredGoal],
    disposable_income: f64,
    allocation: &AllocationPolicy,
    scoring: &ScoringPolicy,
) -> Distribution {
    let budget = monthly_budget(disposable_income, allocation);

    let mut ranked = scored.to_vec();
    rank_goals(&mut ranked);

    let total_priority: f64 = ranked.iter().map(|g| g.priority_score).sum();
    let equal_share = if ranked.is_empty() {
        0.0
    } else {
        1.0 / ranked.len() as f64
    };
    let weighted = total_priority.is_finite() && total_priority > 0.0;
    if !weighted && !ranked.is_empty() {
        tracing::debug!(total_priority, "Priority total unusable, using equal shares");
    }

    let mut remaining_budget = budget;
    let mut shares = Vec::with_capacity(ranked.len());

    for goal in ranked {
        let allocation_ratio = if weighted {
            goal.priority_score / total_priority
        } else {
            equal_share
        };
        let cap = pace_cap(&goal, scoring);

        let suggested = (remaining_budget * allocation_ratio)
            .min(cap)
            .min(remaining_budget)
            .max(0.0);
        remaining_budget = (remaining_budget - suggested).max(0.0);

        shares.push(GoalShare {
            goal,
            pace_cap: cap,
            suggested_monthly_amount: suggested,
            suggested_weekly_amount: suggested / WEEKS_PER_MONTH,
        });
    }

    tracing::debug!(
        budget,
        goals = shares.len(),
        unallocated = remaining_budget,
        "Budget distributed"
    );

    Distribution { budget, shares }
}
