//! Goal scorer
//!
//! Each active goal gets three component scores, combined with the policy
//! weights into a single priority score:
//!
//! - **urgency** = 1 / periods until the deadline (deadline floored at 1 day)
//! - **completion** = current / target
//! - **size** = 1 / (remaining / size unit), favoring quick wins
//!
//! Scores only rank goals against each other; there is no fixed scale.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::config::ScoringPolicy;
use crate::models::{Goal, ScoredGoal};

/// Days until a goal's deadline, clamped to at least one day
///
/// Overdue goals are treated as due tomorrow (maximal urgency). Goals without
/// a deadline use the policy's default horizon.
pub fn days_until_deadline(goal: &Goal, today: NaiveDate, policy: &ScoringPolicy) -> i64 {
    match goal.deadline {
        Some(deadline) => (deadline - today).num_days().max(1),
        None => policy.default_horizon_days as i64,
    }
}

/// Score a single goal, or `None` if it is not active
pub fn score_goal(goal: &Goal, today: NaiveDate, policy: &ScoringPolicy) -> Option<ScoredGoal> {
    if !goal.is_active() {
        return None;
    }

    let remaining_amount = goal.remaining_amount();
    let days = days_until_deadline(goal, today, policy);

    let urgency_score = 1.0 / policy.periods(days);
    let completion_score = goal.current_amount / goal.target_amount;
    let size_score = 1.0 / (remaining_amount / policy.size_unit);

    let priority_score = policy.urgency_weight * urgency_score
        + policy.completion_weight * completion_score
        + policy.size_weight * size_score;

    Some(ScoredGoal {
        goal: goal.clone(),
        remaining_amount,
        days_until_deadline: days,
        urgency_score,
        completion_score,
        size_score,
        priority_score,
    })
}

/// Score every active goal, preserving input order
pub fn score_goals(goals: &[Goal], today: NaiveDate, policy: &ScoringPolicy) -> Vec<ScoredGoal> {
    let scored: Vec<ScoredGoal> = goals
        .iter()
        .filter_map(|g| score_goal(g, today, policy))
        .collect();

    tracing::debug!(
        total = goals.len(),
        active = scored.len(),
        "Goals scored"
    );

    scored
}

/// Sort scored goals by priority, highest first
///
/// The sort is stable, so goals with equal scores keep their input order.
pub fn rank_goals(scored: &mut [ScoredGoal]) {
    scored.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });
}
