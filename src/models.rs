//! Request and response models for the prediction pipeline.

use serde::{Deserialize, Serialize};

use crate::artifact::Feature;

// ---

/// Error shown whenever numeric coercion of the submitted form fails.
/// Parsing happens before any domain rule runs, so a malformed number
/// yields exactly this one message and nothing else.
pub const INVALID_INPUT: &str =
    "Invalid input detected. Please enter valid numbers for all fields.";

/// Feature columns in the exact order used at training time. The model
/// artifact must declare the same columns in the same order.
pub const FEATURE_COLUMNS: [&str; 10] = [
    "N",
    "P",
    "K",
    "pH",
    "rainfall",
    "temperature",
    "Area_in_hectares",
    "State_Name",
    "Crop_Type",
    "Crop",
];

/// Raw form submission. Every field arrives as text; numeric coercion is
/// deferred to [`RawObservation::parse`] so that a malformed or missing
/// value maps to the single generic input error instead of a
/// framework-level rejection with a different shape.
#[derive(Debug, Default, Deserialize)]
pub struct RawObservation {
    // ---
    #[serde(rename = "N")]
    pub n: Option<String>,
    #[serde(rename = "P")]
    pub p: Option<String>,
    #[serde(rename = "K")]
    pub k: Option<String>,
    #[serde(rename = "pH")]
    pub ph: Option<String>,
    pub rainfall: Option<String>,
    pub temperature: Option<String>,
    #[serde(rename = "Area_in_hectares")]
    pub area: Option<String>,
    #[serde(rename = "State_Name")]
    pub state: Option<String>,
    #[serde(rename = "Crop_Type")]
    pub crop_type: Option<String>,
    #[serde(rename = "Crop")]
    pub crop: Option<String>,
}

/// One parsed observation, ready for validation and inference.
/// Constructed per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    // ---
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    /// Rainfall in mm.
    pub rainfall: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Cultivated area in hectares.
    pub area: f64,
    /// Lowercased for table lookups.
    pub state: String,
    /// Passed through to the model as entered.
    pub crop_type: String,
    /// Lowercased for table lookups.
    pub crop: String,
}

impl RawObservation {
    /// Coerce the raw form into an [`Observation`].
    ///
    /// Returns `None` if any numeric field is missing or fails to parse,
    /// or if any text field is missing. Callers surface [`INVALID_INPUT`]
    /// in that case and skip rule evaluation entirely.
    pub fn parse(&self) -> Option<Observation> {
        // ---
        Some(Observation {
            n: num(&self.n)?,
            p: num(&self.p)?,
            k: num(&self.k)?,
            ph: num(&self.ph)?,
            rainfall: num(&self.rainfall)?,
            temperature: num(&self.temperature)?,
            area: num(&self.area)?,
            state: self.state.as_deref()?.trim().to_lowercase(),
            crop_type: self.crop_type.as_deref()?.trim().to_string(),
            crop: self.crop.as_deref()?.trim().to_lowercase(),
        })
    }
}

/// Parse one numeric form field. Rejects non-finite values: NaN would
/// slip through every range comparison unnoticed.
fn num(field: &Option<String>) -> Option<f64> {
    // ---
    let value: f64 = field.as_deref()?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

impl Observation {
    /// Build the feature row for the regressor, in training column order.
    pub fn feature_row(&self) -> Vec<(&'static str, Feature)> {
        // ---
        vec![
            ("N", Feature::Number(self.n)),
            ("P", Feature::Number(self.p)),
            ("K", Feature::Number(self.k)),
            ("pH", Feature::Number(self.ph)),
            ("rainfall", Feature::Number(self.rainfall)),
            ("temperature", Feature::Number(self.temperature)),
            ("Area_in_hectares", Feature::Number(self.area)),
            ("State_Name", Feature::Text(self.state.clone())),
            ("Crop_Type", Feature::Text(self.crop_type.clone())),
            ("Crop", Feature::Text(self.crop.clone())),
        ]
    }
}

// ---

/// JSON body for a successful prediction.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    // ---
    pub production: f64,
    #[serde(rename = "yield")]
    pub yield_value: f64,
    pub final_result: String,
    pub yield_result: String,
    pub warnings: Vec<String>,
    pub soil_warnings: Vec<String>,
    pub crop_recommendations: Vec<String>,
}

/// JSON body for a rejected request. Carries only the hard errors;
/// warnings from the same validation pass are never shown here.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub errors: Vec<String>,
}
