//! Greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Message returned by the root endpoint.
pub const GREETING: &str = "Hello, DevOps";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// GET / — returns the service greeting.
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: GREETING })
}
