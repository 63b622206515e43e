//! The inference adapter: a loaded classifier behind a penguin-shaped API.
//!
//! [`SpeciesPredictor`] wraps a [`KnnClassifier`] deserialized from a
//! PGN artifact, validates its shape against the measurement schema
//! once at load, and from then on is pure, stateless, read-only
//! inference. [`shared`] holds the process-wide copy: loaded lazily on
//! first use, never re-loaded, shared by reference by every later
//! request.
//!
//! # Example
//!
//! ```
//! use pinguino::artifact::{self, SaveOptions};
//! use pinguino::classification::KnnClassifier;
//! use pinguino::predictor::{SpeciesPredictor, MODEL_TYPE};
//! use pinguino::schema::PenguinRecord;
//!
//! // A tiny fitted model standing in for the real artifact.
//! let mut knn = KnnClassifier::new(1);
//! let x = vec![
//!     2.0, 39.0, 18.5, 188.0, 3700.0, 0.0, 8.9, -25.9,
//!     1.0, 49.0, 18.5, 198.0, 3800.0, 1.0, 9.4, -24.6,
//!     0.0, 48.0, 15.0, 218.0, 5000.0, 0.0, 8.3, -26.2,
//! ];
//! knn.fit(&x, 8, &[0, 1, 2]).unwrap();
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("penguin_model.pgn");
//! artifact::save(&knn, MODEL_TYPE, &path, SaveOptions::default()).unwrap();
//!
//! let predictor = SpeciesPredictor::load(&path).unwrap();
//! let prediction = predictor.predict(&PenguinRecord::default()).unwrap();
//! println!("{} ({:.1}%)", prediction.species, prediction.confidence() * 100.0);
//! ```

use crate::artifact::{self, ArtifactInfo};
use crate::classification::KnnClassifier;
use crate::error::{PinguinoError, Result};
use crate::schema::{PenguinRecord, Species, FEATURE_COUNT};
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

/// Artifact model type tag for penguin k-NN classifiers.
pub const MODEL_TYPE: &str = "knn-classifier";

/// Number of species the classifier distinguishes.
pub const N_SPECIES: usize = Species::ALL.len();

/// A predicted species with its class probability distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Most likely species
    pub species: Species,
    /// Probabilities positionally aligned to (Adelie, Chinstrap, Gentoo)
    pub probabilities: [f32; N_SPECIES],
}

impl Prediction {
    /// Probability of the predicted species.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.probabilities[usize::from(self.species.code())]
    }

    /// Iterates (species, probability) pairs in encoding order.
    pub fn breakdown(&self) -> impl Iterator<Item = (Species, f32)> + '_ {
        Species::ALL.into_iter().zip(self.probabilities)
    }
}

/// The loaded, immutable species classifier.
#[derive(Debug, Clone)]
pub struct SpeciesPredictor {
    model: KnnClassifier,
}

impl SpeciesPredictor {
    /// Loads a predictor from a PGN artifact.
    ///
    /// Validates that the artifact carries a k-NN model fitted on the
    /// eight-feature penguin schema with exactly three classes. Failure
    /// is fatal for the caller: there is no fallback model.
    ///
    /// # Errors
    ///
    /// Returns the artifact's own load error (missing file, corrupt or
    /// incompatible container), or a dimension error if the model's
    /// shape doesn't match the schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let model: KnnClassifier = artifact::load(path, MODEL_TYPE)?;
        Self::from_model(model)
    }

    /// Wraps an already-fitted classifier, checking its shape.
    ///
    /// Deserialization bypasses everything `fit` enforces, so the model
    /// is validated for internal consistency before the schema shape
    /// check. A bad artifact fails here, not mid-inference.
    ///
    /// # Errors
    ///
    /// Returns the model's own consistency error, or a dimension error
    /// unless the model has [`FEATURE_COUNT`] features and [`N_SPECIES`]
    /// classes.
    pub fn from_model(model: KnnClassifier) -> Result<Self> {
        model.validate()?;
        if model.n_features() != FEATURE_COUNT {
            return Err(PinguinoError::DimensionMismatch {
                expected: format!("{FEATURE_COUNT} features"),
                actual: model.n_features().to_string(),
            });
        }
        if model.n_classes() != N_SPECIES {
            return Err(PinguinoError::DimensionMismatch {
                expected: format!("{N_SPECIES} classes"),
                actual: model.n_classes().to_string(),
            });
        }
        Ok(Self { model })
    }

    /// Predicts the species of one penguin record.
    ///
    /// # Errors
    ///
    /// Propagates classifier errors; with a shape-validated model and a
    /// schema-built record these cannot occur in practice.
    pub fn predict(&self, record: &PenguinRecord) -> Result<Prediction> {
        self.predict_features(&record.to_features())
    }

    /// Predicts from a raw feature vector in training column order.
    ///
    /// Feature values are not range-checked (k-NN votes purely on
    /// distance), but the predicted class is decoded through the closed
    /// species mapping and the probability distribution always has one
    /// entry per species.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying model rejects the vector or
    /// emits a class outside the species set.
    pub fn predict_features(&self, features: &[f32; FEATURE_COUNT]) -> Result<Prediction> {
        let label = self.model.predict_one(features)?;
        let proba = self.model.predict_proba_one(features)?;

        let species = Species::from_code(u8::try_from(label).map_err(|_| {
            PinguinoError::UnknownCategory {
                field: "species".to_string(),
                value: label.to_string(),
            }
        })?)?;

        let mut probabilities = [0.0f32; N_SPECIES];
        probabilities.copy_from_slice(&proba);

        Ok(Prediction {
            species,
            probabilities,
        })
    }

    /// The wrapped classifier.
    #[must_use]
    pub fn model(&self) -> &KnnClassifier {
        &self.model
    }
}

/// Reads artifact metadata without loading the model.
///
/// # Errors
///
/// Same failure modes as [`SpeciesPredictor::load`], minus model
/// deserialization.
pub fn inspect(path: impl AsRef<Path>) -> Result<ArtifactInfo> {
    artifact::inspect(path)
}

static SHARED: OnceLock<SpeciesPredictor> = OnceLock::new();

/// The process-wide predictor, loaded once from `path` on first call.
///
/// Later calls return the cached instance and ignore `path`; the model
/// is immutable for the life of the process and there is no re-loading.
///
/// # Errors
///
/// Returns the load error if the first initialization fails. A failed
/// load is not cached, so a later call may retry the path.
pub fn shared(path: impl AsRef<Path>) -> Result<&'static SpeciesPredictor> {
    if let Some(predictor) = SHARED.get() {
        return Ok(predictor);
    }
    let predictor = SpeciesPredictor::load(path)?;
    Ok(SHARED.get_or_init(|| predictor))
}

#[cfg(test)]
mod tests;
