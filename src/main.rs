use std::sync::Arc;

use cinesearch::api::{create_router, AppState};
use cinesearch::config::Config;
use cinesearch::services::{MovieSearch, TmdbProvider};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = TmdbProvider::new(&config)?;
    let search = MovieSearch::new(Arc::new(provider));

    // Create the router with all routes
    let app = create_router(AppState::new(search));

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
