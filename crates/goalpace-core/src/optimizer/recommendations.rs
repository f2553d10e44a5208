//! Recommendation generator
//!
//! Rules inspect a finished allocation set and emit advice. Each rule is
//! evaluated independently, so several can fire for the same report. The
//! engine sorts the output by priority (critical first); rules with the same
//! priority keep registration order.

use crate::config::RecommendationPolicy;
use crate::models::Allocation;

use super::types::{Recommendation, RecommendationPriority, RecommendationType};

/// Everything a rule may look at
pub struct RecommendationContext<'a> {
    pub allocations: &'a [Allocation],
    /// Monthly goal budget the allocations were drawn from
    pub budget: f64,
    pub policy: &'a RecommendationPolicy,
}

impl<'a> RecommendationContext<'a> {
    pub fn new(
        allocations: &'a [Allocation],
        budget: f64,
        policy: &'a RecommendationPolicy,
    ) -> Self {
        Self {
            allocations,
            budget,
            policy,
        }
    }

    pub fn total_allocated(&self) -> f64 {
        self.allocations
            .iter()
            .map(|a| a.suggested_monthly_amount)
            .sum()
    }

    /// Share of the budget that was allocated; 0 when there is no budget
    pub fn utilization_rate(&self) -> f64 {
        utilization_rate(self.total_allocated(), self.budget)
    }
}

/// `allocated / budget`, defined as 0 for an empty budget
pub fn utilization_rate(allocated: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        allocated / budget
    } else {
        0.0
    }
}

/// A single recommendation check
pub trait RecommendationRule: Send + Sync {
    /// Type of recommendation this rule produces
    fn id(&self) -> RecommendationType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect the allocations and produce at most one recommendation
    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation>;
}

fn join_names<'a>(allocations: impl IntoIterator<Item = &'a Allocation>) -> String {
    allocations
        .into_iter()
        .map(|a| a.goal_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Several nearly-finished goals could be closed out quickly
pub struct ConsolidateRule;

impl RecommendationRule for ConsolidateRule {
    fn id(&self) -> RecommendationType {
        RecommendationType::Consolidate
    }

    fn name(&self) -> &'static str {
        "Consolidate Small Goals"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        let threshold = ctx.policy.small_goal_threshold;
        let small: Vec<&Allocation> = ctx
            .allocations
            .iter()
            .filter(|a| a.remaining_amount < threshold)
            .collect();

        if small.is_empty() || small.len() < ctx.policy.consolidate_min_goals {
            return None;
        }

        let total_remaining: f64 = small.iter().map(|a| a.remaining_amount).sum();
        let freed_monthly: f64 = small.iter().map(|a| a.suggested_monthly_amount).sum();

        Some(
            Recommendation::new(
                self.id(),
                RecommendationPriority::High,
                "Knock Out Small Goals",
                format!(
                    "{} goals need less than ${:.0} each (${:.2} combined): {}",
                    small.len(),
                    threshold,
                    total_remaining,
                    join_names(small.iter().copied())
                ),
            )
            .with_action("Temporarily prioritize these goals to finish them quickly")
            .with_impact(format!(
                "Closing them out frees ${:.2}/month for larger goals",
                freed_monthly
            ))
            .with_goals(small.iter().map(|a| a.goal_id.clone())),
        )
    }
}

/// Goals that will miss their deadline, or never finish, at the current pace
pub struct UrgencyRule;

impl RecommendationRule for UrgencyRule {
    fn id(&self) -> RecommendationType {
        RecommendationType::Urgency
    }

    fn name(&self) -> &'static str {
        "Off-Track Goals"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        let off_track: Vec<&Allocation> = ctx.allocations.iter().filter(|a| !a.on_track).collect();

        if off_track.is_empty() {
            return None;
        }

        // Monthly amount still missing to hit each deadline
        let shortfall: f64 = off_track
            .iter()
            .filter(|a| a.deadline.is_some())
            .map(|a| (a.pace_cap - a.suggested_monthly_amount).max(0.0))
            .sum();

        let impact = if shortfall > 0.0 {
            format!(
                "About ${:.2}/month more would keep these goals on schedule",
                shortfall
            )
        } else {
            "These goals receive no contribution at the current budget".to_string()
        };

        Some(
            Recommendation::new(
                self.id(),
                RecommendationPriority::Critical,
                "Goals Behind Schedule",
                format!(
                    "{} goal{} will not finish on time at the suggested pace: {}",
                    off_track.len(),
                    plural(off_track.len()),
                    join_names(off_track.iter().copied())
                ),
            )
            .with_action("Increase contributions or push back the deadlines")
            .with_impact(impact)
            .with_goals(off_track.iter().map(|a| a.goal_id.clone())),
        )
    }
}

/// A large part of the goal budget is left unassigned
///
/// Happens when pace caps bind: goals cannot usefully absorb more money.
pub struct UnderutilizedRule;

impl RecommendationRule for UnderutilizedRule {
    fn id(&self) -> RecommendationType {
        RecommendationType::Underutilized
    }

    fn name(&self) -> &'static str {
        "Underutilized Budget"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        // Zero budget is the NoCapacity rule's concern
        if ctx.budget <= 0.0 {
            return None;
        }

        let rate = ctx.utilization_rate();
        if rate >= ctx.policy.underutilized_ratio {
            return None;
        }

        let headroom = (ctx.budget - ctx.total_allocated()).max(0.0);

        Some(
            Recommendation::new(
                self.id(),
                RecommendationPriority::Medium,
                "Unused Savings Capacity",
                format!(
                    "Only {:.0}% of your ${:.2} monthly goal budget is allocated",
                    rate * 100.0,
                    ctx.budget
                ),
            )
            .with_action(format!(
                "Raise contributions by up to ${:.2}/month or add a new goal",
                headroom
            ))
            .with_impact(format!(
                "Putting the headroom to work adds ${:.0} per year toward your goals",
                headroom * 12.0
            )),
        )
    }
}

/// Too few goals to balance saving across horizons
pub struct DiversifyRule;

impl RecommendationRule for DiversifyRule {
    fn id(&self) -> RecommendationType {
        RecommendationType::Diversify
    }

    fn name(&self) -> &'static str {
        "Diversify Goals"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        let count = ctx.allocations.len();
        if count == 0 || count >= ctx.policy.diversify_min_goals {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationPriority::Low,
                "Broaden Your Goals",
                format!("You are saving toward {} goal{}", count, plural(count)),
            )
            .with_action("Consider adding goals such as an emergency fund or retirement savings")
            .with_impact("Spreading savings across goals balances short- and long-term needs"),
        )
    }
}

/// Active goals but nothing to allocate
pub struct NoCapacityRule;

impl RecommendationRule for NoCapacityRule {
    fn id(&self) -> RecommendationType {
        RecommendationType::NoCapacity
    }

    fn name(&self) -> &'static str {
        "No Savings Capacity"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
        if ctx.budget > 0.0 || ctx.allocations.is_empty() {
            return None;
        }

        let count = ctx.allocations.len();
        Some(
            Recommendation::new(
                self.id(),
                RecommendationPriority::High,
                "No Room in the Budget",
                format!(
                    "Expenses match or exceed income, so nothing can be set aside for your {} active goal{}",
                    count,
                    plural(count)
                ),
            )
            .with_action("Review recurring expenses or find additional income")
            .with_impact("Any monthly surplus restarts progress on your goals")
            .with_goals(ctx.allocations.iter().map(|a| a.goal_id.clone())),
        )
    }
}

/// Runs the registered rules over an allocation set
pub struct RecommendationEngine {
    rules: Vec<Box<dyn RecommendationRule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(UrgencyRule));
        engine.register(Box::new(NoCapacityRule));
        engine.register(Box::new(ConsolidateRule));
        engine.register(Box::new(UnderutilizedRule));
        engine.register(Box::new(DiversifyRule));

        engine
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn register(&mut self, rule: Box<dyn RecommendationRule>) {
        self.rules.push(rule);
    }

    /// Types of the registered rules, in registration order
    pub fn rule_types(&self) -> Vec<RecommendationType> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Evaluate every rule; an empty allocation set yields nothing
    pub fn generate(&self, ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
        if ctx.allocations.is_empty() {
            return vec![];
        }

        let mut recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let result = rule.evaluate(ctx);
                if result.is_some() {
                    tracing::debug!(rule = rule.name(), "Recommendation fired");
                }
                result
            })
            .collect();

        recommendations.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        recommendations
    }
}

/// Run the built-in rules over an allocation set
pub fn generate_recommendations(
    allocations: &[Allocation],
    budget: f64,
    policy: &RecommendationPolicy,
) -> Vec<Recommendation> {
    RecommendationEngine::new().generate(&RecommendationContext::new(allocations, budget, policy))
}
