use tracing::{info, warn};

/// Resolves on Ctrl-C, or SIGTERM on unix.
///
/// A signal source that cannot be installed never resolves, so the
/// server keeps running on the remaining one.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for_ctrl_c();

    #[cfg(unix)]
    let terminate = wait_for_sigterm();

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, stopping server..."),
        () = terminate => info!("Received SIGTERM, stopping server..."),
    }
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            warn!("Failed to listen for SIGTERM: {e}");
            std::future::pending::<()>().await;
        }
    }
}
