//! Graceful-shutdown trigger for the HTTP server.

use std::future::Future;
use std::io;

use tracing::{info, warn};

/// Resolves once `signal` reports a shutdown request.
///
/// When `signal` fails, the failure is logged and this future never
/// resolves, so the server keeps running until the process is killed.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "failed to listen for shutdown signal; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
