//! Pinguino: penguin species prediction over the Palmer measurements.
//!
//! A pre-trained k-nearest-neighbors classifier, serialized as a PGN
//! artifact, predicts one of three species (Adelie, Chinstrap, Gentoo)
//! from eight physical measurements. The library covers the measurement
//! schema, the classifier, the artifact container, and the inference
//! adapter; the interactive form lives in the `pinguino-cli` crate.
//!
//! # Quick Start
//!
//! ```
//! use pinguino::prelude::*;
//!
//! // Fit a tiny stand-in classifier (real artifacts ship pre-fitted).
//! let x = vec![
//!     2.0, 39.0, 18.5, 188.0, 3700.0, 0.0, 8.9, -25.9,
//!     1.0, 49.0, 18.5, 198.0, 3800.0, 1.0, 9.4, -24.6,
//!     0.0, 48.0, 15.0, 218.0, 5000.0, 0.0, 8.3, -26.2,
//! ];
//! let mut knn = KnnClassifier::new(1);
//! knn.fit(&x, 8, &[0, 1, 2]).unwrap();
//!
//! let predictor = SpeciesPredictor::from_model(knn).unwrap();
//! let prediction = predictor.predict(&PenguinRecord::default()).unwrap();
//!
//! assert!(Species::ALL.contains(&prediction.species));
//! let total: f32 = prediction.probabilities.iter().sum();
//! assert!((total - 1.0).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! - [`schema`]: closed categorical sets, measurement ranges, the record type
//! - [`classification`]: the k-NN classifier
//! - [`artifact`]: the PGN model container (save/load/inspect)
//! - [`predictor`]: the inference adapter and the process-wide cached instance
//! - [`error`]: error types

pub mod artifact;
pub mod classification;
pub mod error;
pub mod predictor;
pub mod prelude;
pub mod schema;
