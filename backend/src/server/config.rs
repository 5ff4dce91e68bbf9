//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::Dispatch;
use user_service::domain::ports::UserStorage;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: Arc<dyn UserStorage>,
    pub(crate) logger: Dispatch,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration around a storage backend.
    ///
    /// `logger` receives the user service's failure events.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, storage: Arc<dyn UserStorage>, logger: Dispatch) -> Self {
        Self {
            bind_addr,
            storage,
            logger,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by unit tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
