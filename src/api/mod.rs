//! HTTP API surface and server bootstrap

pub mod error_mapper;
pub mod handler;
pub mod helpers;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::clients::TwitterApi;

pub use error_mapper::map_twitter_error;
pub use handler::{AppState, router};

/// Serves the relay on an already-bound listener until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, twitter: Arc<dyn TwitterApi>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server is running on http://{}", addr);
    }
    axum::serve(listener, router(twitter))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
