//! Server lifecycle errors.

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Failures while starting or running the HTTP server.
///
/// Request handlers are infallible; these only surface from `main`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] BuildError),
}
