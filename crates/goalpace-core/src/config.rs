//! Optimizer policy configuration
//!
//! Every tunable number the optimizer uses lives here: scoring weights, the
//! budget ratio, recommendation thresholds and the cash-flow window.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/goalpace/config/optimizer.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Every key in the file is optional; missing keys keep their default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/optimizer.toml");

pub const DEFAULT_URGENCY_WEIGHT: f64 = 0.5;
pub const DEFAULT_COMPLETION_WEIGHT: f64 = 0.3;
pub const DEFAULT_SIZE_WEIGHT: f64 = 0.2;
pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const DEFAULT_SIZE_UNIT: f64 = 1000.0;
pub const DEFAULT_HORIZON_DAYS: u32 = 365;
pub const DEFAULT_BUDGET_RATIO: f64 = 0.6;
pub const DEFAULT_SMALL_GOAL_THRESHOLD: f64 = 500.0;
pub const DEFAULT_CONSOLIDATE_MIN_GOALS: usize = 2;
pub const DEFAULT_UNDERUTILIZED_RATIO: f64 = 0.7;
pub const DEFAULT_DIVERSIFY_MIN_GOALS: usize = 3;
pub const DEFAULT_CASH_FLOW_WINDOW_DAYS: u32 = 30;

/// Longest accepted cash-flow window (ten years)
pub const MAX_CASH_FLOW_WINDOW_DAYS: u32 = 3_660;

/// Weights and units for goal priority scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub urgency_weight: f64,
    pub completion_weight: f64,
    pub size_weight: f64,
    /// Length of one period for the urgency score and the pace cap
    pub period_days: u32,
    /// Remaining-amount unit for the size score
    pub size_unit: f64,
    /// Horizon assumed for goals without a deadline
    pub default_horizon_days: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            urgency_weight: DEFAULT_URGENCY_WEIGHT,
            completion_weight: DEFAULT_COMPLETION_WEIGHT,
            size_weight: DEFAULT_SIZE_WEIGHT,
            period_days: DEFAULT_PERIOD_DAYS,
            size_unit: DEFAULT_SIZE_UNIT,
            default_horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl ScoringPolicy {
    /// Number of periods in a horizon, e.g. 45 days = 1.5 periods
    pub fn periods(&self, days: i64) -> f64 {
        days as f64 / self.period_days as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationPolicy {
    /// Share of positive disposable income earmarked for goals
    pub budget_ratio: f64,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            budget_ratio: DEFAULT_BUDGET_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPolicy {
    pub small_goal_threshold: f64,
    /// Small goals needed before suggesting a merge; must be at least 1
    pub consolidate_min_goals: usize,
    pub underutilized_ratio: f64,
    /// Suggest diversifying below this many goals; 0 or 1 disables the rule
    pub diversify_min_goals: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            small_goal_threshold: DEFAULT_SMALL_GOAL_THRESHOLD,
            consolidate_min_goals: DEFAULT_CONSOLIDATE_MIN_GOALS,
            underutilized_ratio: DEFAULT_UNDERUTILIZED_RATIO,
            diversify_min_goals: DEFAULT_DIVERSIFY_MIN_GOALS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowPolicy {
    pub window_days: u32,
}

impl Default for CashFlowPolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_CASH_FLOW_WINDOW_DAYS,
        }
    }
}

/// Complete optimizer policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub scoring: ScoringPolicy,
    pub allocation: AllocationPolicy,
    pub recommendations: RecommendationPolicy,
    pub cash_flow: CashFlowPolicy,
}

impl OptimizerConfig {
    /// Load config, preferring `override_path`, then the data dir override,
    /// then the embedded defaults
    ///
    /// An explicit path that does not exist is an error; a missing data dir
    /// override is not.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                tracing::debug!(path = %path.display(), "Loading optimizer config");
                read_config(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "Loading optimizer config override");
                    read_config(&path)?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: OptimizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the config as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Reject policies the optimizer cannot run with
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        for (name, weight) in [
            ("urgency_weight", s.urgency_weight),
            ("completion_weight", s.completion_weight),
            ("size_weight", s.size_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Config(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if s.period_days == 0 {
            return Err(Error::Config("scoring.period_days must be positive".into()));
        }
        if s.default_horizon_days == 0 {
            return Err(Error::Config(
                "scoring.default_horizon_days must be positive".into(),
            ));
        }
        if !s.size_unit.is_finite() || s.size_unit <= 0.0 {
            return Err(Error::Config(format!(
                "scoring.size_unit must be positive, got {}",
                s.size_unit
            )));
        }

        let ratio = self.allocation.budget_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(Error::Config(format!(
                "allocation.budget_ratio must be in (0, 1], got {}",
                ratio
            )));
        }

        let r = &self.recommendations;
        if !r.small_goal_threshold.is_finite() || r.small_goal_threshold < 0.0 {
            return Err(Error::Config(format!(
                "recommendations.small_goal_threshold must be non-negative, got {}",
                r.small_goal_threshold
            )));
        }
        if r.consolidate_min_goals == 0 {
            return Err(Error::Config(
                "recommendations.consolidate_min_goals must be at least 1".into(),
            ));
        }
        if !r.underutilized_ratio.is_finite() || r.underutilized_ratio < 0.0 {
            return Err(Error::Config(format!(
                "recommendations.underutilized_ratio must be non-negative, got {}",
                r.underutilized_ratio
            )));
        }

        let window = self.cash_flow.window_days;
        if window == 0 || window > MAX_CASH_FLOW_WINDOW_DAYS {
            return Err(Error::Config(format!(
                "cash_flow.window_days must be between 1 and {}, got {}",
                MAX_CASH_FLOW_WINDOW_DAYS, window
            )));
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("goalpace").join("config").join("optimizer.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = OptimizerConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = OptimizerConfig::from_toml(
            r#"
            [scoring]
            urgency_weight = 0.7

            [allocation]
            budget_ratio = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(config.scoring.urgency_weight, 0.7);
        assert_eq!(config.scoring.completion_weight, DEFAULT_COMPLETION_WEIGHT);
        assert_eq!(config.allocation.budget_ratio, 0.8);
        assert_eq!(config.recommendations, RecommendationPolicy::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = OptimizerConfig::from_toml("").unwrap();
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn test_invalid_budget_ratio_rejected() {
        let err = OptimizerConfig::from_toml("[allocation]\nbudget_ratio = 1.5\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("budget_ratio"));

        assert!(OptimizerConfig::from_toml("[allocation]\nbudget_ratio = 0.0\n").is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = OptimizerConfig::from_toml("[scoring]\nsize_weight = -0.1\n").unwrap_err();
        assert!(err.to_string().contains("size_weight"));
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(OptimizerConfig::from_toml("[scoring]\nperiod_days = 0\n").is_err());
        assert!(OptimizerConfig::from_toml("[cash_flow]\nwindow_days = 0\n").is_err());
    }

    #[test]
    fn test_zero_consolidate_min_goals_rejected() {
        let err = OptimizerConfig::from_toml("[recommendations]\nconsolidate_min_goals = 0\n")
            .unwrap_err();
        assert!(err.to_string().contains("consolidate_min_goals"));

        let config =
            OptimizerConfig::from_toml("[recommendations]\ndiversify_min_goals = 0\n").unwrap();
        assert_eq!(config.recommendations.diversify_min_goals, 0);
    }

    #[test]
    fn test_window_upper_bound() {
        let err = OptimizerConfig::from_toml("[cash_flow]\nwindow_days = 4000000000\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("window_days"));

        let config = OptimizerConfig::from_toml("[cash_flow]\nwindow_days = 3660\n").unwrap();
        assert_eq!(config.cash_flow.window_days, MAX_CASH_FLOW_WINDOW_DAYS);
    }

    #[test]
    fn test_malformed_toml() {
        let err = OptimizerConfig::from_toml("[scoring\nurgency_weight = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = OptimizerConfig::default();
        config.recommendations.small_goal_threshold = 250.0;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("small_goal_threshold = 250.0"));
        assert_eq!(OptimizerConfig::from_toml(&rendered).unwrap(), config);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[recommendations]\ndiversify_min_goals = 5").unwrap();

        let config = OptimizerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.recommendations.diversify_min_goals, 5);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = OptimizerConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_periods() {
        let scoring = ScoringPolicy::default();
        assert_eq!(scoring.periods(30), 1.0);
        assert_eq!(scoring.periods(45), 1.5);
    }
}
