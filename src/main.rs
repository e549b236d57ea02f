use anyhow::Result;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zendesk_mcp::{stdio, ZendeskConfig, ZendeskServer};

const CONFIG_PATH_VAR: &str = "ZENDESK_MCP_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => ZendeskConfig::from_file(&path)?,
        Err(_) => ZendeskConfig::from_env()?,
    };

    // stdout carries protocol frames only; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("zendesk_mcp={}", config.server.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }

    tracing::info!("Starting Zendesk MCP Server");
    tracing::info!(
        "Configuration loaded: domain={}, base_url={}",
        config.zendesk.domain,
        config.api_base_url()
    );

    let server = ZendeskServer::new(config)?;

    tracing::info!("Available tools: {}", server.get_tools().len());
    for tool in server.get_tools() {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    tracing::info!("Zendesk MCP Server running with stdio transport");
    stdio::run(&server, BufReader::new(io::stdin()), io::stdout()).await?;

    tracing::info!("Zendesk MCP Server shutting down");
    Ok(())
}
