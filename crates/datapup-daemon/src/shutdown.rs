//! Shutdown signal handling.

use std::future::Future;
use std::io;

/// Resolves when `signal` fires. If the signal cannot be installed the error
/// is logged and this never resolves, so the daemon keeps receiving.
pub async fn on_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
}

/// Resolves on Ctrl-C.
pub async fn ctrl_c() {
    on_signal(tokio::signal::ctrl_c()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn fired_signal_resolves() {
        let fired = tokio::time::timeout(Duration::from_secs(1), on_signal(async { Ok(()) })).await;
        assert!(fired.is_ok());
    }

    #[tokio::test]
    async fn failed_install_never_resolves() {
        let failed = on_signal(async { Err(io::Error::new(io::ErrorKind::Other, "no signals")) });
        let res = tokio::time::timeout(Duration::from_millis(50), failed).await;
        assert!(res.is_err(), "a failed handler must not trigger shutdown");
    }
}
