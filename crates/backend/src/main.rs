use axum::middleware;
use tokio::net::TcpListener;

use backend::routes::{configure_routes, cors_layer};
use backend::shared::config;
use backend::state::AppState;
use backend::system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let uploads_dir = system::initialization::ensure_uploads_dir(&config)?;

    let state = AppState::from_config(&config, uploads_dir);
    tracing::info!(
        "Sales analytics: {} catalog products, ranges up to {} days",
        state.sales_analytics.catalog().len(),
        state.sales_analytics.max_range_days()
    );

    let app = configure_routes(state)
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors_layer(&config.cors)?);

    let addr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // keep serving rather than exiting right away
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
