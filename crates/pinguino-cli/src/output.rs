//! Output formatting utilities.

use colored::Colorize;
use pinguino::predictor::Prediction;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Render a prediction for the terminal.
pub(crate) fn render_prediction(prediction: &Prediction) {
    section("Prediction");
    kv(
        "Species",
        prediction.species.as_str().green().bold().to_string(),
    );
    kv("Image", prediction.species.image_url());

    println!("\n{}", "Model confidence:".white().bold());
    for (species, probability) in prediction.breakdown() {
        println!("  - {}: {:.2}%", species, probability * 100.0);
    }
}

/// Render a prediction as JSON on stdout.
pub(crate) fn render_prediction_json(prediction: &Prediction) {
    let breakdown: serde_json::Map<String, serde_json::Value> = prediction
        .breakdown()
        .map(|(species, probability)| {
            (
                species.as_str().to_string(),
                serde_json::Value::from(probability),
            )
        })
        .collect();

    let out = serde_json::json!({
        "species": prediction.species.as_str(),
        "image_url": prediction.species.image_url(),
        "confidence": prediction.confidence(),
        "probabilities": breakdown,
    });
    println!("{out:#}");
}
