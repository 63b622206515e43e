//! Inspect command: artifact metadata without loading the model.

use crate::error::{CliError, Result};
use crate::output;
use pinguino::predictor;
use std::path::Path;

/// Run the inspect command.
pub(crate) fn run(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }

    let info = predictor::inspect(file)?;

    if json {
        let out = serde_json::json!({
            "file": file.display().to_string(),
            "model_type": info.model_type,
            "version": format!("{}.{}", info.version.0, info.version.1),
            "name": info.name,
            "description": info.description,
            "payload_len": info.payload_len,
        });
        println!("{out:#}");
        return Ok(());
    }

    output::section("Artifact");
    output::kv("File", file.display());
    output::kv("Model type", &info.model_type);
    output::kv("Version", format!("{}.{}", info.version.0, info.version.1));
    output::kv("Name", info.name.as_deref().unwrap_or("-"));
    output::kv("Description", info.description.as_deref().unwrap_or("-"));
    output::kv("Payload size", format!("{} bytes", info.payload_len));

    Ok(())
}
