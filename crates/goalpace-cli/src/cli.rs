//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Goalpace - Split your savings across goals
#[derive(Parser)]
#[command(name = "goalpace")]
#[command(about = "Savings goal allocation optimizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optimizer policy file (TOML)
    ///
    /// Defaults to ~/.local/share/goalpace/config/optimizer.toml when present,
    /// otherwise the built-in policy.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest monthly contributions for each goal
    Optimize {
        /// Goals file (JSON array)
        #[arg(short, long)]
        goals: PathBuf,

        /// Transactions file (.csv or .json) to derive cash flow from
        #[arg(short, long, conflicts_with_all = ["income", "expenses"])]
        transactions: Option<PathBuf>,

        /// Monthly income (instead of --transactions)
        #[arg(long)]
        income: Option<f64>,

        /// Monthly expenses (used with --income, defaults to 0)
        #[arg(long, requires = "income")]
        expenses: Option<f64>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize monthly income and expenses from transactions
    CashFlow {
        /// Transactions file (.csv or .json)
        #[arg(short, long)]
        transactions: PathBuf,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective optimizer policy
    Policy,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable)
        #[arg(long)]
        origin: Vec<String>,
    },
}
