mod config;
mod cors;
mod download;
mod error;
mod init;
mod routes;
mod upload;

use crate::{
    config::{Config, LISTEN_ADDR},
    error::AppError,
    routes::{create_router, API_PREFIX},
};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    init_logging();

    let config = Arc::new(Config::from_env());
    tracing::info!(
        path = %config.sample_data_path.display(),
        "using sample data path"
    );

    let app = create_router(config);

    let listener = TcpListener::bind(LISTEN_ADDR)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", LISTEN_ADDR, e)))?;
    tracing::info!("Speed test server running at http://{}{}", LISTEN_ADDR, API_PREFIX);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received termination signal, shutting down");
}
