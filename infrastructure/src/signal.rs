//! OS interrupt handling
//!
//! Translates Ctrl+C (SIGINT) and SIGTERM into cancellation of a
//! [`CancellationToken`] that the session loop observes.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Wait for Ctrl+C or, on Unix, SIGTERM.
///
/// If a handler cannot be installed the failure is logged and that
/// signal is ignored.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c() => {}
                    _ = sigterm.recv() => {
                        tracing::debug!("SIGTERM received");
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c().await;
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::debug!("Ctrl+C received"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Cancel `token` when a shutdown signal arrives.
///
/// The listener also exits quietly if the token is cancelled by someone
/// else first (duration limit, cycle limit).
pub fn spawn_shutdown_listener(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown_signal() => {
                tracing::info!("Shutdown requested");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listener_exits_when_token_cancelled_elsewhere() {
        let token = CancellationToken::new();
        let handle = spawn_shutdown_listener(token.clone());
        token.cancel();
        handle.await.unwrap();
        assert!(token.is_cancelled());
    }
}
