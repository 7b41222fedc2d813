//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use library_backend::outbound::persistence::DbPool;

#[cfg(feature = "metrics")]
use super::metrics::MetricsLayer;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    #[cfg(feature = "metrics")]
    pub(crate) metrics: MetricsLayer,
}

impl ServerConfig {
    /// Construct a server configuration around the shared database pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            #[cfg(feature = "metrics")]
            metrics: MetricsLayer::Disabled,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach the Prometheus middleware.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricsLayer) -> Self {
        self.metrics = metrics;
        self
    }
}
