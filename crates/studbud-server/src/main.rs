use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use studbud_server::config::ServerConfig;
use studbud_service::{GeminiGenerator, PlanRequester, API_KEY_ENV};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let generation = config.generation_config();
    if generation.api_key.is_none() {
        warn!("{API_KEY_ENV} is not set; plan requests will fail until it is");
    }
    info!("model: {}", generation.model);

    let requester = PlanRequester::new(Arc::new(GeminiGenerator::new(generation)));

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("studbud-server listening on http://{addr}");

    studbud_server::serve(listener, requester).await
}
