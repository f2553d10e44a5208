//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `input` - Shared utilities (config, input files, dates)
//! - `optimize` - Goal allocation report
//! - `cash_flow` - Cash-flow summary
//! - `policy` - Effective policy display
//! - `serve` - Web server command

pub mod cash_flow;
pub mod input;
pub mod optimize;
pub mod policy;
pub mod serve;

// Re-export command functions for main.rs
pub use cash_flow::*;
pub use input::*;
pub use optimize::*;
pub use policy::*;
pub use serve::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
