//! Predict command: the measurement form plus one inference call.

use crate::error::{CliError, Result};
use crate::form::{self, PartialRecord};
use crate::output;
use pinguino::predictor;
use std::path::Path;

/// Run the predict command.
///
/// Fields missing from `partial` are prompted for interactively; the
/// classifier is loaded once per process and reused on later calls.
pub(crate) fn run(model: &Path, partial: PartialRecord, json: bool) -> Result<()> {
    if !model.exists() {
        return Err(CliError::FileNotFound(model.to_path_buf()));
    }

    let partial = partial.clamp_flags();
    if json && !partial.is_complete() {
        // JSON mode is for scripting; prompting would hang a pipeline.
        return Err(CliError::InvalidInput(
            "all measurement flags are required with --json".to_string(),
        ));
    }
    let record = form::complete(partial)?;

    let predictor = predictor::shared(model)?;
    let prediction = predictor.predict(&record)?;

    if json {
        output::render_prediction_json(&prediction);
    } else {
        output::render_prediction(&prediction);
    }

    Ok(())
}
