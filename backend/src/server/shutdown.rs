//! Signal-driven graceful shutdown.
//!
//! Liveness flips to failing before the server stops accepting connections,
//! so orchestrators stop routing traffic while in-flight requests drain.

use std::future::Future;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};
use user_service::inbound::http::health::HealthState;

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
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
}

/// Once `signal` resolves, fail liveness and stop the server gracefully.
pub(crate) async fn drain_on<F>(
    signal: F,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) where
    F: Future<Output = ()>,
{
    signal.await;
    health_state.mark_unhealthy();
    info!("shutdown requested; draining connections");
    handle.stop(true).await;
}
