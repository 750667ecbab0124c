//! Request metrics and the optional Prometheus exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ServerError;

/// Requests served, labelled by method, route and status.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Handler latency in seconds, labelled by method and route.
pub const METRIC_HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Registers metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total HTTP requests served");
    describe_histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        metrics::Unit::Seconds,
        "HTTP request latency"
    );
}

/// Route label for requests that carry no `MatchedPath`.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Installs the Prometheus recorder with its own scrape listener on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<(), ServerError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_metrics();
    tracing::info!(%addr, "prometheus exporter listening");
    Ok(())
}

/// Middleware recording request count and latency per matched route.
///
/// Applied as a route layer so `MatchedPath` is present and unmatched requests
/// never reach it. Anything without a matched route is labelled
/// [`UNMATCHED_PATH`], so the `path` label stays bounded.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method,
        "path" => path,
        "status" => status
    )
    .increment(1);

    response
}
