//! Goal Allocation Optimizer
//!
//! Decides how much of a user's disposable income should go to each of their
//! savings goals. A run is a pure function of a goal snapshot, a cash-flow
//! figure and an explicit `today`, so repeated runs are identical.
//!
//! ## Stages
//!
//! - **Cash flow** - Trailing-window income and expense totals
//! - **Scoring** - Urgency, completion and size scores per active goal
//! - **Allocation** - Priority-ordered, pace-capped budget split
//! - **Projection** - Completion date and on-track flag
//! - **Recommendations** - Pluggable advisory rules
//!
//! ## Usage
//!
//! ```rust,ignore
//! use goalpace_core::optimizer::Optimizer;
//!
//! let optimizer = Optimizer::load(None)?;
//! let cash_flow = optimizer.summarize(&transactions, today);
//! let report = optimizer.optimize_checked(&goals, &cash_flow, today)?;
//! ```

pub mod allocation;
pub mod cash_flow;
pub mod engine;
pub mod projection;
pub mod recommendations;
pub mod scoring;
pub mod types;

pub use allocation::{distribute, monthly_budget, pace_cap, Distribution, GoalShare};
pub use cash_flow::summarize_cash_flow;
pub use engine::Optimizer;
pub use projection::{project_completion, Projection};
pub use recommendations::{
    generate_recommendations, ConsolidateRule, DiversifyRule, NoCapacityRule,
    RecommendationContext, RecommendationEngine, RecommendationRule, UnderutilizedRule,
    UrgencyRule,
};
pub use scoring::{days_until_deadline, rank_goals, score_goal, score_goals};
pub use types::{Recommendation, RecommendationPriority, RecommendationType};
