//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use pinguino::prelude::*;
//! ```

pub use crate::classification::{DistanceMetric, KnnClassifier};
pub use crate::error::{PinguinoError, Result};
pub use crate::predictor::{Prediction, SpeciesPredictor};
pub use crate::schema::{Island, PenguinRecord, Sex, Species, FEATURE_COUNT, FEATURE_NAMES};
