//! hcac MCP server binary
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "hcac": {
//!       "command": "hcac-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use hcac_core::Pacing;
use hcac_mcp::CategorizerService;

#[derive(Parser)]
#[command(name = "hcac-mcp")]
#[command(about = "MCP server for keyword-based product categorization")]
#[command(version)]
struct Args {
    /// Delay before each categorize result in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(delay_ms = args.delay_ms, "starting hcac MCP server");

    let service = CategorizerService::new(Pacing::from_millis(args.delay_ms));
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    tracing::info!("hcac MCP server stopped");
    Ok(())
}
