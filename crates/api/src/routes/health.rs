//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Value reported while the process is able to serve requests.
pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness probe for monitoring and orchestration.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTHY })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn check_reports_healthy() {
        let Json(body) = check().await;
        assert_eq!(body, HealthResponse { status: "healthy" });
    }
}
