//! Greeting and health-check HTTP service.
//!
//! Serves `GET /` and `GET /health` as fixed JSON responses, with structured
//! logging (tracing) and optional Prometheus metrics.

pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;

use axum::Router;
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router with all routes and layers.
pub fn create_app() -> Router {
    routes::router()
        .route_layer(middleware::from_fn(metrics::track_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds to the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: &Config, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "starting API server");

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
