use tokio::signal;

/// Resolves on Ctrl+C so axum can drain in-flight requests.
pub async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        crate::error::log_error(&e);
        // no handler, keep serving until killed
        std::future::pending::<()>().await;
    }

    #[cfg(not(windows))]
    println!();
    tracing::info!("Ctrl+C recieved. Please wait, this could take a while.");
}
