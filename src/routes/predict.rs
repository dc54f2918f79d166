//! Prediction endpoint: coerce the submitted form, validate it against the
//! agronomic rules, then run the regressor.
//!
//! A request moves through three stages: received (raw text fields),
//! validated (parsed observation plus a [`ValidationOutcome`]), and finally
//! predicted or rejected. Hard errors reject; warnings accompany a
//! successful prediction and are discarded on rejection.
//!
//! [`ValidationOutcome`]: crate::validate::ValidationOutcome

use std::sync::Arc;

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Form, Json, Router,
};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::models::{
    PredictionResponse, RawObservation, RejectionResponse, FEATURE_COLUMNS, INVALID_INPUT,
};
use crate::{validate, ModelArtifact};

// ---

pub fn router() -> Router<Arc<ModelArtifact>> {
    // ---
    Router::new().route("/predict", get(describe).post(handler))
}

/// JSON description of the expected form fields, the API equivalent of
/// serving the empty form page.
#[derive(Serialize)]
struct FormDescription {
    fields: [&'static str; 10],
}

/// Handle `GET /predict`.
async fn describe() -> Json<FormDescription> {
    Json(FormDescription {
        fields: FEATURE_COLUMNS,
    })
}

/// Handle `POST /predict`.
async fn handler(
    State(model): State<Arc<ModelArtifact>>,
    Form(form): Form<RawObservation>,
) -> impl IntoResponse {
    // ---
    info!("POST /predict - Received observation");

    // Step 1: numeric coercion gates everything. A parse failure yields
    // the single generic error and no rule evaluation.
    let Some(obs) = form.parse() else {
        debug!("POST /predict - Rejecting: coercion failed");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RejectionResponse {
                errors: vec![INVALID_INPUT.to_string()],
            }),
        )
            .into_response();
    };

    // Step 2: run every domain rule
    let outcome = validate::validate(&obs);
    if outcome.blocks_prediction() {
        // A rejection surfaces hard errors only; warnings gathered in the
        // same pass are dropped.
        info!(
            "POST /predict - Rejecting with {} hard errors",
            outcome.errors.len()
        );
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RejectionResponse {
                errors: outcome.errors,
            }),
        )
            .into_response();
    }

    // Step 3: inference
    debug!("POST /predict - Running inference");

    let predicted = match model.predict(&obs.feature_row()) {
        Ok(value) => value,
        Err(e) => {
            error!("Model inference failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Json("Prediction failed"))
                .into_response();
        }
    };

    let production = round2(predicted);
    let yield_value = round2(production / obs.area);

    info!(
        "POST /predict - Predicted {} tons over {} hectares",
        production, obs.area
    );

    (
        StatusCode::OK,
        Json(PredictionResponse {
            production,
            yield_value,
            final_result: format!("Predicted Crop Production: {production} tons"),
            yield_result: format!("Predicted Yield: {yield_value} tons/hectare"),
            warnings: outcome.warnings,
            soil_warnings: outcome.soil_warnings,
            crop_recommendations: outcome.recommendations,
        }),
    )
        .into_response()
}

/// Round to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_round2() {
        // ---
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(10.0 / 2.0), 5.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(9.999), 10.0);
        assert_eq!(round2(12.5), 12.5);
    }
}
