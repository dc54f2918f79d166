use std::collections::HashMap;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

// Run against a live instance started with MODEL_PATH=testdata/model.json;
// override the target with BASE_URL.

#[derive(Debug, Deserialize)]
struct Prediction {
    production: f64,
    #[serde(rename = "yield")]
    yield_value: f64,
    final_result: String,
    yield_result: String,
    warnings: Vec<String>,
    soil_warnings: Vec<String>,
    crop_recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Rejection {
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FormDescription {
    fields: Vec<String>,
}

// ---

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into())
}

/// Wheat in Punjab with every value inside the recorded norms.
fn valid_form() -> HashMap<&'static str, &'static str> {
    // ---
    HashMap::from([
        ("N", "80"),
        ("P", "40"),
        ("K", "100"),
        ("pH", "6.5"),
        ("rainfall", "650"),
        ("temperature", "25"),
        ("Area_in_hectares", "2.0"),
        ("State_Name", "Punjab"),
        ("Crop_Type", "Rabi"),
        ("Crop", "Wheat"),
    ])
}

#[tokio::test]
async fn predict_endpoint_returns_rounded_production_and_yield() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    let response = Client::new().post(&url).form(&valid_form()).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    let prediction: Prediction = response.json().await?;

    assert!(
        prediction.production > 0.0,
        "production should be positive, got {}",
        prediction.production
    );

    // yield = production / area, both rounded to 2 decimals
    let expected_yield = (prediction.production / 2.0 * 100.0).round() / 100.0;
    assert!(
        (prediction.yield_value - expected_yield).abs() < 0.01,
        "yield wrong: production {} over 2 ha should give {}, got {}",
        prediction.production,
        expected_yield,
        prediction.yield_value
    );

    assert!(
        prediction.final_result.starts_with("Predicted Crop Production:"),
        "final_result: {}",
        prediction.final_result
    );
    assert!(
        prediction.yield_result.contains("tons/hectare"),
        "yield_result: {}",
        prediction.yield_result
    );

    // A fully in-range observation carries no advisories
    assert!(prediction.warnings.is_empty(), "{:?}", prediction.warnings);
    assert!(prediction.soil_warnings.is_empty(), "{:?}", prediction.soil_warnings);
    assert!(
        prediction.crop_recommendations.is_empty(),
        "{:?}",
        prediction.crop_recommendations
    );

    Ok(())
}

#[tokio::test]
async fn non_numeric_input_is_rejected_with_generic_error() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    let mut form = valid_form();
    form.insert("N", "eighty");

    let response = Client::new().post(&url).form(&form).send().await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let rejection: Rejection = response.json().await?;
    assert_eq!(
        rejection.errors,
        vec!["Invalid input detected. Please enter valid numbers for all fields.".to_string()],
        "a parse failure must yield exactly the generic error"
    );

    Ok(())
}

#[tokio::test]
async fn nonpositive_values_are_rejected_with_each_error() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    let mut form = valid_form();
    form.insert("N", "-5");
    form.insert("rainfall", "0");

    let response = Client::new().post(&url).form(&form).send().await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let rejection: Rejection = response.json().await?;
    assert_eq!(rejection.errors.len(), 2, "errors: {:?}", rejection.errors);
    assert!(rejection
        .errors
        .contains(&"Nitrogen (N) value cannot be negative or zero.".to_string()));
    assert!(rejection
        .errors
        .contains(&"Rainfall value cannot be negative or zero.".to_string()));

    Ok(())
}

#[tokio::test]
async fn unsuitable_crop_predicts_with_warning_and_recommendations() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    // Rice in Rajasthan: soil values inside the state norms so only the
    // crop mismatch fires.
    let form = HashMap::from([
        ("N", "50"),
        ("P", "20"),
        ("K", "100"),
        ("pH", "7.5"),
        ("rainfall", "1300"),
        ("temperature", "25"),
        ("Area_in_hectares", "1.5"),
        ("State_Name", "Rajasthan"),
        ("Crop_Type", "Kharif"),
        ("Crop", "Rice"),
    ]);

    let response = Client::new().post(&url).form(&form).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    let prediction: Prediction = response.json().await?;

    assert!(
        prediction
            .warnings
            .contains(&"Rice is not suitable for Rajasthan.".to_string()),
        "warnings: {:?}",
        prediction.warnings
    );
    assert_eq!(prediction.crop_recommendations.len(), 1);
    assert!(
        prediction.crop_recommendations[0].contains("Pearl Millet"),
        "recommendations: {:?}",
        prediction.crop_recommendations
    );
    assert!(prediction.soil_warnings.is_empty(), "{:?}", prediction.soil_warnings);

    Ok(())
}

#[tokio::test]
async fn soil_warning_accompanies_successful_prediction() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    // Punjab records N between 50 and 180
    let mut form = valid_form();
    form.insert("N", "10");

    let response = Client::new().post(&url).form(&form).send().await?;
    assert_eq!(response.status(), StatusCode::OK);

    let prediction: Prediction = response.json().await?;
    assert_eq!(
        prediction.soil_warnings.len(),
        1,
        "soil_warnings: {:?}",
        prediction.soil_warnings
    );
    assert!(
        prediction.soil_warnings[0].contains("50-180"),
        "soil_warnings: {:?}",
        prediction.soil_warnings
    );

    Ok(())
}

#[tokio::test]
async fn form_description_lists_expected_fields() -> Result<()> {
    // ---
    let url = format!("{}/predict", base_url());

    let description: FormDescription = Client::new().get(&url).send().await?.json().await?;
    assert_eq!(description.fields.len(), 10);
    assert!(description.fields.contains(&"Area_in_hectares".to_string()));

    Ok(())
}
