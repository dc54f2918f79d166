use std::sync::Arc;

use axum::Router;

use crate::ModelArtifact;

mod health;
mod predict;

// ---

pub fn router(model: Arc<ModelArtifact>) -> Router {
    // ---
    Router::new()
        .merge(predict::router())
        .merge(health::router())
        .with_state(model)
}
