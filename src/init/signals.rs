use axum_server::Handle;
use std::time::Duration;
use tracing::info;

/// Grace period given to in-flight requests on shutdown.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Resolves on Ctrl+C or, on unix, the terminate signal.
///
/// # Panics
/// Panics if a signal handler cannot be installed.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C"),
        () = terminate => info!("Received terminate signal"),
    }
}

/// Wait for a shutdown signal, then stop the server behind `handle`.
pub async fn graceful_shutdown(handle: Handle) {
    shutdown_signal().await;

    info!(
        "Shutting down, remaining connections: {}",
        handle.connection_count()
    );
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
