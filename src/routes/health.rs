// src/routes/health.rs
//! API health check endpoint for the cropcast backend.
//!
//! Defines the `/health` route used by container orchestrators and CI
//! pipelines to verify that the service is up and able to respond. It is a
//! sibling module in the `routes` directory following the Explicit Module
//! Boundary Pattern (EMBP): the handler stays internal, only a subrouter is
//! exported for the gateway (`mod.rs`) to merge, so `main.rs` never needs
//! to know about individual endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`.
///
/// Returns a static JSON object indicating the API is reachable. This
/// endpoint is deliberately lightweight and does not touch the model
/// artifact or reference tables.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges cleanly with the
/// gateway router regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
