//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::load_optimizer;

pub async fn cmd_serve(
    config: Option<&Path>,
    host: &str,
    port: u16,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let optimizer = load_optimizer(config)?;

    println!("🚀 Starting Goalpace web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(path) = config {
        println!("   Policy: {}", path.display());
    }
    if !allowed_origins.is_empty() {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = goalpace_server::ServerConfig { allowed_origins };
    goalpace_server::serve_with_config(optimizer, host, port, server_config).await?;

    Ok(())
}
