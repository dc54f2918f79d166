//! Rule-based validation of observations against regional agronomic norms.
//!
//! The validator is a pure function over one [`Observation`] and the static
//! reference tables. Hard errors block prediction; warnings and
//! recommendations ride along with a successful one. Every rule is
//! evaluated independently — a failing rule never short-circuits the rest,
//! so all applicable messages accumulate in a single pass.

use crate::models::Observation;
use crate::tables;

// ---

/// Categorized result of one validation pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationOutcome {
    // ---
    /// Hard errors. Non-empty means prediction must not be attempted.
    pub errors: Vec<String>,
    /// Soil nutrient levels outside the state's usual range.
    pub soil_warnings: Vec<String>,
    /// Crop suitability and weather tolerance notes.
    pub warnings: Vec<String>,
    /// Alternative crops suggested for the state.
    pub recommendations: Vec<String>,
}

impl ValidationOutcome {
    pub fn blocks_prediction(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Check one observation against the sanity rules and reference tables.
pub fn validate(obs: &Observation) -> ValidationOutcome {
    // ---
    let mut outcome = ValidationOutcome::default();

    if obs.ph < 0.0 {
        outcome.errors.push("pH value cannot be negative.".into());
    }
    if obs.rainfall <= 0.0 {
        outcome
            .errors
            .push("Rainfall value cannot be negative or zero.".into());
    }
    if obs.n <= 0.0 {
        outcome
            .errors
            .push("Nitrogen (N) value cannot be negative or zero.".into());
    }
    if obs.p <= 0.0 {
        outcome
            .errors
            .push("Phosphorus (P) value cannot be negative or zero.".into());
    }
    if obs.k <= 0.0 {
        outcome
            .errors
            .push("Potassium (K) value cannot be negative or zero.".into());
    }
    // Yield is production / area, so a non-positive area can never reach
    // the division.
    if obs.area <= 0.0 {
        outcome
            .errors
            .push("Area in hectares must be greater than zero.".into());
    }

    // Soil norms for the state, when recorded. Bounds are inclusive.
    if let Some([ph, n, p, k]) = tables::SOIL_RANGES.get(obs.state.as_str()) {
        let checks = [(ph, obs.ph), (n, obs.n), (p, obs.p), (k, obs.k)];
        for ((label, (min, max)), value) in checks {
            if value < *min || value > *max {
                outcome.soil_warnings.push(format!(
                    "{label} levels in {} usually range between {min}-{max}. Entered: {value}",
                    title_case(&obs.state),
                ));
            }
        }
    }

    // Crop suitability for the state, when recorded.
    if let Some(advice) = tables::CROP_ADVICE.get(obs.state.as_str()) {
        if advice.unsuitable.contains(&obs.crop.as_str()) {
            outcome.warnings.push(format!(
                "{} is not suitable for {}.",
                title_case(&obs.crop),
                title_case(&obs.state),
            ));

            let listed: Vec<String> = advice.recommended.iter().map(|c| title_case(c)).collect();
            outcome.recommendations.push(format!(
                "Recommended crops for {}: {}",
                title_case(&obs.state),
                listed.join(", "),
            ));
        }
    }

    // Weather tolerances for the crop, when recorded.
    if let Some((min, max)) = tables::TEMPERATURE_RANGES.get(obs.crop.as_str()) {
        if obs.temperature < *min || obs.temperature > *max {
            let side = if obs.temperature < *min { "low" } else { "high" };
            outcome.warnings.push(format!(
                "Temperature too {side} for {}.",
                title_case(&obs.crop),
            ));
        }
    }

    if let Some((min, max)) = tables::RAINFALL_RANGES.get(obs.crop.as_str()) {
        if obs.rainfall < *min || obs.rainfall > *max {
            let side = if obs.rainfall < *min { "low" } else { "high" };
            outcome.warnings.push(format!(
                "Rainfall too {side} for {}.",
                title_case(&obs.crop),
            ));
        }
    }

    outcome
}

/// Capitalize each whitespace-separated word ("pearl millet" → "Pearl Millet").
fn title_case(name: &str) -> String {
    // ---
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
