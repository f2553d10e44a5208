//! Integration tests for goalpace-core
//!
//! These tests exercise the full load → summarize → optimize workflow.

use std::io::Write;

use chrono::NaiveDate;
use goalpace_core::{
    import::{parse_goals_json, parse_transactions_csv, parse_transactions_json},
    CashFlowSummary, Error, Optimizer, RecommendationPriority, RecommendationType,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// Three goals: one nearly done, one with a tight deadline, one open-ended
fn goals_json() -> &'static str {
    r#"[
        {"id": "emergency", "name": "Emergency Fund", "target_amount": 10000, "current_amount": 3000, "deadline": "2027-06-14"},
        {"id": "laptop", "name": "New Laptop", "target_amount": 1500, "current_amount": 1200, "deadline": "2026-12-31"},
        {"id": "house", "name": "House Deposit", "target_amount": 40000, "current_amount": 5000},
        {"id": "bike", "name": "Bike", "target_amount": 800, "current_amount": 800}
    ]"#
}

/// One month of bank-export rows, plus older and future rows that fall
/// outside the window
fn transactions_csv() -> &'static str {
    r#"Date,Description,Amount
09/01/2026,PAYROLL,-3100.00
10/01/2026,PAYROLL,(3100.00)
10/15/2026,FREELANCE,"-$1,200.00"
10/02/2026,RENT,1400.00
10/05/2026,GROCERIES,250.50
10/12/2026,UTILITIES,$149.50
10/30/2026,PAYROLL,-3100.00"#
}

// =============================================================================
// Workflow Tests
// =============================================================================

#[test]
fn test_full_optimize_workflow() {
    let goals = parse_goals_json(goals_json().as_bytes()).expect("Failed to parse goals");
    assert_eq!(goals.len(), 4);

    let transactions =
        parse_transactions_csv(transactions_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(transactions.len(), 7);

    let optimizer = Optimizer::new();
    let cash_flow = optimizer.summarize(&transactions, today());
    assert_eq!(cash_flow.monthly_income, 4300.0);
    assert_eq!(cash_flow.monthly_expenses, 1800.0);

    let report = optimizer
        .optimize_transactions(&goals, &transactions, today())
        .expect("Optimization failed");

    // The completed bike goal is excluded
    assert_eq!(report.summary.total_goals, 3);
    assert!(report.allocations.iter().all(|a| a.goal_id != "bike"));

    assert_eq!(report.summary.monthly_disposable, 2500.0);
    assert!((report.summary.monthly_budget - 1500.0).abs() < 1e-9);
    assert!(report.summary.total_monthly_allocation <= report.summary.monthly_budget + 1e-9);

    for allocation in &report.allocations {
        assert!(allocation.suggested_monthly_amount <= allocation.pace_cap + 1e-9);
        assert_eq!(
            allocation.suggested_weekly_amount,
            allocation.suggested_monthly_amount / 4.0
        );
    }

    // Allocations come back in priority order
    let scores: Vec<f64> = report.allocations.iter().map(|a| a.priority_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    // Recommendations come back critical first
    let ranks: Vec<u8> = report
        .recommendations
        .iter()
        .map(|r| r.priority.rank())
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_json_transactions_match_csv() {
    let json = r#"[
        {"date": "2026-10-01", "amount": 3100.0, "kind": "income"},
        {"date": "2026-10-15", "description": "FREELANCE", "amount": 1200.0, "kind": "income"},
        {"date": "2026-10-02", "amount": 1400.0, "kind": "expense"},
        {"date": "2026-10-05", "amount": 250.5, "kind": "expense"},
        {"date": "2026-10-12", "amount": 149.5, "kind": "expense"}
    ]"#;

    let optimizer = Optimizer::new();
    let from_json = optimizer.summarize(
        &parse_transactions_json(json.as_bytes()).unwrap(),
        today(),
    );
    let from_csv = optimizer.summarize(
        &parse_transactions_csv(transactions_csv().as_bytes()).unwrap(),
        today(),
    );
    assert_eq!(from_json, from_csv);
}

#[test]
fn test_invalid_goals_rejected_before_optimizing() {
    let goals = parse_goals_json(
        r#"[
            {"id": "a", "name": "A", "target_amount": 1000},
            {"id": "a", "name": "A again", "target_amount": 2000}
        ]"#
        .as_bytes(),
    )
    .unwrap();

    let err = Optimizer::new()
        .optimize_checked(&goals, &CashFlowSummary::new(1000.0, 0.0), today())
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_overspending_surfaces_capacity_note() {
    let goals = parse_goals_json(goals_json().as_bytes()).unwrap();

    let report = Optimizer::new()
        .optimize_checked(&goals, &CashFlowSummary::new(2000.0, 2500.0), today())
        .unwrap();

    assert!(report
        .allocations
        .iter()
        .all(|a| a.suggested_monthly_amount == 0.0 && !a.on_track));

    let capacity = report
        .recommendations
        .iter()
        .find(|r| r.recommendation_type == RecommendationType::NoCapacity)
        .expect("Expected a no-capacity recommendation");
    assert_eq!(capacity.priority, RecommendationPriority::High);
    assert_eq!(capacity.goal_ids.len(), 3);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_file_changes_allocation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[allocation]\nbudget_ratio = 0.3").unwrap();

    let goals = parse_goals_json(goals_json().as_bytes()).unwrap();
    let cash_flow = CashFlowSummary::new(4000.0, 2000.0);

    let default_report = Optimizer::new().optimize(&goals, &cash_flow, today());
    let tuned = Optimizer::load(Some(file.path())).expect("Failed to load config");
    let tuned_report = tuned.optimize(&goals, &cash_flow, today());

    assert!((default_report.summary.monthly_budget - 1200.0).abs() < 1e-9);
    assert!((tuned_report.summary.monthly_budget - 600.0).abs() < 1e-9);
    assert!(
        tuned_report.summary.total_monthly_allocation
            <= default_report.summary.total_monthly_allocation
    );
}

#[test]
fn test_invalid_config_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[scoring]\nurgency_weight = -1.0").unwrap();

    let err = Optimizer::load(Some(file.path()))
        .err()
        .expect("Expected config error");
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_report_serializes_with_tagged_types() {
    let goals = parse_goals_json(goals_json().as_bytes()).unwrap();
    let report = Optimizer::new().optimize(&goals, &CashFlowSummary::default(), today());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["generated_on"], "2026-10-17");
    assert!(json["allocations"][0]["estimated_completion_date"].is_null());
    let types: Vec<&str> = json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert!(types.contains(&"urgency"));
    assert!(types.contains(&"no_capacity"));
}
