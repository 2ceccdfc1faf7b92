//! Claims Assistant - Bootstrap Entry Point
//!
//! Builds the agent once at startup and publishes it for the hosting runtime.

use claims_assistant::{bootstrap, toolbox::ToolboxClient, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claims_assistant=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Toolbox endpoint: {:?}", config.toolbox_url);

    // Resolve the toolset and assemble the agent; any failure here is fatal.
    let toolbox = ToolboxClient::from_config(&config);
    let agent = bootstrap::bootstrap(&toolbox).await?;

    info!(
        "Agent ready: {} (model {}), tools: [{}]",
        agent.name,
        agent.model,
        agent.toolset.tool_names().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
