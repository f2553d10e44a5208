//! Recommendation types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of advisory recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Several small goals could be finished quickly
    Consolidate,
    /// Goals will miss their deadline at the suggested pace
    Urgency,
    /// A large share of the goal budget is unassigned
    Underutilized,
    /// Too few goals to balance short- and long-term saving
    Diversify,
    /// Income does not exceed expenses, so nothing can be allocated
    NoCapacity,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Consolidate => "consolidate",
            RecommendationType::Urgency => "urgency",
            RecommendationType::Underutilized => "underutilized",
            RecommendationType::Diversify => "diversify",
            RecommendationType::NoCapacity => "no_capacity",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consolidate" => Ok(RecommendationType::Consolidate),
            "urgency" => Ok(RecommendationType::Urgency),
            "underutilized" => Ok(RecommendationType::Underutilized),
            "diversify" => Ok(RecommendationType::Diversify),
            "no_capacity" => Ok(RecommendationType::NoCapacity),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

/// How pressing a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl RecommendationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationPriority::Low => "low",
            RecommendationPriority::Medium => "medium",
            RecommendationPriority::High => "high",
            RecommendationPriority::Critical => "critical",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            RecommendationPriority::Low => 1,
            RecommendationPriority::Medium => 2,
            RecommendationPriority::High => 3,
            RecommendationPriority::Critical => 4,
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RecommendationPriority::Low),
            "medium" => Ok(RecommendationPriority::Medium),
            "high" => Ok(RecommendationPriority::High),
            "critical" => Ok(RecommendationPriority::Critical),
            _ => Err(format!("Unknown recommendation priority: {}", s)),
        }
    }
}

/// An advisory recommendation derived from an allocation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub priority: RecommendationPriority,
    /// Short title (e.g., "Goals Behind Schedule")
    pub title: String,
    /// What was observed
    pub description: String,
    /// What the user could do about it
    pub action: String,
    /// What doing it would change
    pub impact: String,
    /// Goals the recommendation refers to, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal_ids: Vec<String>,
}

impl Recommendation {
    pub fn new(
        recommendation_type: RecommendationType,
        priority: RecommendationPriority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            recommendation_type,
            priority,
            title: title.into(),
            description: description.into(),
            action: String::new(),
            impact: String::new(),
            goal_ids: vec![],
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = impact.into();
        self
    }

    pub fn with_goals<I, S>(mut self, goal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goal_ids = goal_ids.into_iter().map(Into::into).collect();
        self
    }
}
