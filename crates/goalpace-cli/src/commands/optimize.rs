//! Optimize command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use goalpace_core::{OptimizationReport, Optimizer, RecommendationPriority};

use super::{load_goals, load_optimizer, load_transactions, parse_today, truncate, CashSource};

/// Load inputs and run the optimizer
pub fn build_report(
    optimizer: &Optimizer,
    goals_path: &Path,
    cash: &CashSource,
    today: NaiveDate,
) -> Result<OptimizationReport> {
    let goals = load_goals(goals_path)?;

    let report = match cash {
        CashSource::Transactions(path) => {
            let transactions = load_transactions(path)?;
            optimizer.optimize_transactions(&goals, &transactions, today)
        }
        CashSource::Figures(cash_flow) => optimizer.optimize_checked(&goals, cash_flow, today),
    };

    report.context("Invalid optimizer input")
}

pub fn cmd_optimize(
    config: Option<&Path>,
    goals_path: &Path,
    cash: CashSource,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let optimizer = load_optimizer(config)?;
    let today = parse_today(today)?;
    let report = build_report(&optimizer, goals_path, &cash, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &OptimizationReport) {
    let summary = &report.summary;

    println!();
    println!("🎯 Goal Allocation ({})", report.generated_on);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Disposable income: ${:.2}/month", summary.monthly_disposable);
    println!("   Goal budget:       ${:.2}/month", summary.monthly_budget);

    if report.is_empty() {
        println!();
        println!("   No active goals to optimize. Every goal has reached its target.");
        println!();
        return;
    }

    println!();
    for allocation in &report.allocations {
        let status_icon = if allocation.on_track { "✅" } else { "⚠️ " };
        let done = allocation
            .estimated_completion_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "never".to_string());
        let deadline = allocation
            .deadline
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "   {} {:20} │ {:>10}/mo │ {:>9}/wk │ done {:10} │ due {}",
            status_icon,
            truncate(&allocation.goal_name, 20),
            format!("${:.2}", allocation.suggested_monthly_amount),
            format!("${:.2}", allocation.suggested_weekly_amount),
            done,
            deadline
        );
    }

    println!();
    println!(
        "   Allocated: ${:.2}/month ({:.0}% of budget)",
        summary.total_monthly_allocation,
        summary.utilization_rate * 100.0
    );
    if summary.average_completion_months > 0.0 {
        println!(
            "   Average time to completion: {:.1} months",
            summary.average_completion_months
        );
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("💡 Recommendations");
        println!("   ─────────────────────────────────────────────────────────────");
        for rec in &report.recommendations {
            let icon = match rec.priority {
                RecommendationPriority::Critical => "🚨",
                RecommendationPriority::High => "🔥",
                RecommendationPriority::Medium => "📈",
                RecommendationPriority::Low => "🌱",
            };
            println!("   {} {} [{}]", icon, rec.title, rec.priority);
            println!("      {}", rec.description);
            if !rec.action.is_empty() {
                println!("      → {}", rec.action);
            }
            if !rec.impact.is_empty() {
                println!("      {}", rec.impact);
            }
        }
    }

    println!();
}
