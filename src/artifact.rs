//! Trained-regressor artifact: loading and inference.
//!
//! The training pipeline lives outside this service. What it hands over is
//! a JSON export of the fitted regressor: the feature columns in training
//! order, an intercept, and one weight per column — a coefficient for
//! numeric columns, a level table (plus a fallback for unseen levels) for
//! categorical ones. The artifact is loaded once at startup and consumed
//! read-only; a feature row that disagrees with the recorded columns is a
//! fatal integration error, never silently reordered.
use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

// ---

/// One value of a feature row, matched against the column's weight kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Number(f64),
    Text(String),
}

/// Per-column weight recorded at training time.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Weight {
    // ---
    Numeric {
        coef: f64,
    },
    Categorical {
        levels: HashMap<String, f64>,
        #[serde(default)]
        fallback: f64,
    },
}

/// The trained regressor, as exported by the training pipeline.
#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    // ---
    columns: Vec<String>,
    intercept: f64,
    weights: HashMap<String, Weight>,
}

/// Inference failures. These indicate an artifact trained against a
/// different feature contract than this service speaks — not user error,
/// and not recoverable by retrying the request.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    // ---
    #[error("feature row has {got} columns, model expects {expected}")]
    ColumnCount { expected: usize, got: usize },

    #[error("feature row column {position} is \"{got}\", model expects \"{expected}\"")]
    ColumnMismatch {
        position: usize,
        expected: String,
        got: String,
    },

    #[error("column \"{0}\" carries no weight in the artifact")]
    MissingWeight(String),

    #[error("column \"{0}\" expects a numeric value")]
    ExpectedNumber(String),

    #[error("column \"{0}\" expects a categorical value")]
    ExpectedText(String),
}

/// Load and integrity-check the artifact from disk.
pub fn load(path: &str) -> Result<ModelArtifact> {
    // ---
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model artifact '{path}'"))?;

    parse(&raw).with_context(|| format!("Malformed model artifact '{path}'"))
}

fn parse(raw: &str) -> Result<ModelArtifact> {
    // ---
    let artifact: ModelArtifact = serde_json::from_str(raw)?;

    for column in &artifact.columns {
        if !artifact.weights.contains_key(column) {
            anyhow::bail!("column \"{column}\" is declared but carries no weight");
        }
    }

    Ok(artifact)
}

impl ModelArtifact {
    /// Feature columns in the order the regressor was trained on.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Run inference over one feature row.
    ///
    /// The row must carry exactly the artifact's columns, in order.
    /// Categorical lookups are case-insensitive; a level the training data
    /// never saw falls back to the column's recorded fallback weight.
    pub fn predict(&self, row: &[(&str, Feature)]) -> Result<f64, PredictError> {
        // ---
        if row.len() != self.columns.len() {
            return Err(PredictError::ColumnCount {
                expected: self.columns.len(),
                got: row.len(),
            });
        }

        let mut total = self.intercept;

        for (position, (column, (name, feature))) in self.columns.iter().zip(row).enumerate() {
            if column != name {
                return Err(PredictError::ColumnMismatch {
                    position,
                    expected: column.clone(),
                    got: (*name).to_string(),
                });
            }

            let weight = self
                .weights
                .get(column)
                .ok_or_else(|| PredictError::MissingWeight(column.clone()))?;

            total += match (weight, feature) {
                (Weight::Numeric { coef }, Feature::Number(value)) => coef * value,
                (Weight::Categorical { levels, fallback }, Feature::Text(text)) => levels
                    .get(&text.to_lowercase())
                    .copied()
                    .unwrap_or(*fallback),
                (Weight::Numeric { .. }, Feature::Text(_)) => {
                    return Err(PredictError::ExpectedNumber(column.clone()))
                }
                (Weight::Categorical { .. }, Feature::Number(_)) => {
                    return Err(PredictError::ExpectedText(column.clone()))
                }
            };
        }

        Ok(total)
    }
}
