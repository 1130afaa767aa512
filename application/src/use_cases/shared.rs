//! Shared utilities for use cases.
//!
//! Cancellation checking and cancellable pauses. Pauses are the only
//! suspension points of a session.

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Whether the session should stop: token cancelled or deadline reached.
pub(crate) fn should_stop(token: &CancellationToken, deadline: Option<Instant>) -> bool {
    token.is_cancelled() || deadline.is_some_and(|d| Instant::now() >= d)
}

/// Sleep for `duration` unless the token is cancelled first.
///
/// Returns `true` if the pause was interrupted by cancellation.
pub(crate) async fn pause_cancellable(
    duration: std::time::Duration,
    token: &CancellationToken,
) -> bool {
    if token.is_cancelled() {
        return true;
    }
    if duration.is_zero() {
        return false;
    }
    tokio::select! {
        _ = token.cancelled() => true,
        _ = tokio::time::sleep(duration) => false,
    }
}
