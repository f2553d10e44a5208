//! Policy command implementation

use std::path::Path;

use anyhow::Result;
use goalpace_core::config::default_config_path;

use super::load_optimizer;

pub fn cmd_policy(config: Option<&Path>) -> Result<()> {
    let optimizer = load_optimizer(config)?;

    let source = match config {
        Some(path) => path.display().to_string(),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        },
    };

    println!("# Source: {}", source);
    print!("{}", optimizer.config().to_toml()?);

    Ok(())
}
