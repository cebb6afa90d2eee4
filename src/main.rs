use anyhow::Result;
use tracing::info;

use warranty_pricing_web::{app, config::Config, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    let addr = config.socket_addr();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting warranty pricing server on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections..."),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
