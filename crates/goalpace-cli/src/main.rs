//! Goalpace CLI - Savings goal allocation optimizer
//!
//! Usage:
//!   goalpace optimize --goals goals.json --transactions tx.csv
//!   goalpace optimize --goals goals.json --income 5000 --expenses 3200
//!   goalpace cash-flow --transactions tx.csv
//!   goalpace policy                    Show effective optimizer policy
//!   goalpace serve --port 3000         Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Optimize {
            goals,
            transactions,
            income,
            expenses,
            today,
            json,
        } => {
            let cash = commands::CashSource::from_args(transactions.as_deref(), income, expenses)?;
            commands::cmd_optimize(config, &goals, cash, today.as_deref(), json)
        }
        Commands::CashFlow {
            transactions,
            today,
            json,
        } => commands::cmd_cash_flow(config, &transactions, today.as_deref(), json),
        Commands::Policy => commands::cmd_policy(config),
        Commands::Serve { port, host, origin } => {
            commands::cmd_serve(config, &host, port, origin).await
        }
    }
}
