#![forbid(unsafe_code)]

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Public API of the server crate.
pub use config::{Config, DEFAULT_PORT};
pub use error::{ApiError, ConfigError, ServeError};
pub use routes::router;
pub use state::AppState;

/// Bind the configured port and serve until a shutdown signal arrives.
///
/// # Errors
///
/// Returns `ServeError::Io` when the port cannot be bound or the accept
/// loop fails.
pub async fn serve(state: Arc<AppState>) -> Result<(), ServeError> {
    let app = routes::router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
