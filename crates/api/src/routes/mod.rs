//! HTTP route handlers.

pub mod health;
pub mod root;

use axum::Router;
use axum::routing::get;

/// Route table without middleware.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root::hello))
        .route("/health", get(health::check))
}
