//! pathgraph-server binary: load config, initialize tracing, serve until Ctrl-C.

use std::sync::Arc;

use pathgraph_server::{app, init_tracing, AppState, ServerConfig};
use tracing::info;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::load(&std::env::current_dir()?);
    init_tracing(&config)?;

    info!(
        listen = %config.listen,
        max_nodes = config.limits.max_nodes,
        body_limit = config.body_limit,
        "config loaded"
    );

    let listen = config.listen.clone();
    let state = Arc::new(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("listening on http://{}", listen);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
