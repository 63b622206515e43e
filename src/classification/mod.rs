//! The k-nearest-neighbors classifier behind the species predictor.
//!
//! kNN is a lazy learner: fitting stores the training samples verbatim,
//! and every prediction is a distance scan over that stored set. For
//! the penguin model that set is a few hundred rows of eight features,
//! so inference is constant, bounded work.
//!
//! # Example
//!
//! ```
//! use pinguino::classification::KnnClassifier;
//!
//! // Two well-separated classes in a 2-feature space.
//! let x = vec![
//!     0.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 0.0,
//!     5.0, 5.0,
//!     5.0, 6.0,
//!     6.0, 5.0,
//! ];
//! let y = vec![0, 0, 0, 1, 1, 1];
//!
//! let mut knn = KnnClassifier::new(3);
//! knn.fit(&x, 2, &y).expect("valid training data");
//!
//! assert_eq!(knn.predict_one(&[0.5, 0.5]).expect("fitted"), 0);
//! ```

use crate::error::{PinguinoError, Result};
use serde::{Deserialize, Serialize};

/// Distance metric used to rank neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euclidean (L2) distance
    Euclidean,
    /// Manhattan (L1) distance
    Manhattan,
    /// Minkowski distance with parameter p
    Minkowski(f32),
}

/// K-nearest-neighbors classifier.
///
/// Stores its training set row-major and classifies by majority (or
/// inverse-distance-weighted) vote among the `k` closest stored rows.
/// Feature values are taken as-is: the classifier performs no range
/// checks, so out-of-training-range inputs are silently accepted and
/// simply land far from every stored point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnClassifier {
    /// Number of neighbors voting
    k: usize,
    /// Distance metric
    metric: DistanceMetric,
    /// Inverse-distance weighting of votes
    weighted: bool,
    /// Row-major training samples, `n_samples * n_features` values
    samples: Vec<f32>,
    /// Training labels, one per row
    labels: Vec<usize>,
    /// Features per row (0 until fitted)
    n_features: usize,
    /// Number of classes (max label + 1, 0 until fitted)
    n_classes: usize,
}

impl KnnClassifier {
    /// Creates a classifier voting among `k` neighbors.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: DistanceMetric::Euclidean,
            weighted: false,
            samples: Vec::new(),
            labels: Vec::new(),
            n_features: 0,
            n_classes: 0,
        }
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables inverse-distance weighting of neighbor votes.
    #[must_use]
    pub fn with_weights(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Number of features per sample, 0 before fitting.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of classes, 0 before fitting.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of stored training samples.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    /// Neighbor count `k`.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Fits the classifier by storing the training data.
    ///
    /// `x` is row-major with `n_features` values per row, `y` holds one
    /// label per row. Labels must be dense in `0..n_classes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is empty or ragged, if label and row
    /// counts differ, if `k` is zero, or if `k` exceeds the number of
    /// training samples.
    pub fn fit(&mut self, x: &[f32], n_features: usize, y: &[usize]) -> Result<()> {
        if self.k == 0 {
            return Err(PinguinoError::InvalidHyperparameter {
                param: "k".to_string(),
                value: "0".to_string(),
                constraint: "k >= 1".to_string(),
            });
        }
        if n_features == 0 || x.is_empty() {
            return Err("Cannot fit with zero samples".into());
        }
        if x.len() % n_features != 0 {
            return Err(PinguinoError::DimensionMismatch {
                expected: format!("a multiple of {n_features} values"),
                actual: x.len().to_string(),
            });
        }

        let n_samples = x.len() / n_features;
        if y.len() != n_samples {
            return Err(PinguinoError::DimensionMismatch {
                expected: format!("{n_samples} labels"),
                actual: y.len().to_string(),
            });
        }
        if self.k > n_samples {
            return Err(PinguinoError::InvalidHyperparameter {
                param: "k".to_string(),
                value: self.k.to_string(),
                constraint: format!("k <= {n_samples} training samples"),
            });
        }

        self.samples = x.to_vec();
        self.labels = y.to_vec();
        self.n_features = n_features;
        self.n_classes = y.iter().max().map_or(0, |&m| m + 1);

        Ok(())
    }

    /// Checks the internal consistency of a model.
    ///
    /// `fit` establishes these invariants at construction, but a model
    /// deserialized from an artifact arrives with arbitrary field
    /// values, so loading must re-check them before inference.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted, if the sample buffer
    /// length disagrees with `n_features * n_samples`, if `k` is zero
    /// or exceeds the sample count, or if the labels don't span exactly
    /// `0..n_classes`.
    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 || self.labels.is_empty() {
            return Err("Model not fitted".into());
        }
        if self.samples.len() != self.n_features * self.labels.len() {
            return Err(PinguinoError::DimensionMismatch {
                expected: format!(
                    "{} sample values ({} rows of {} features)",
                    self.n_features * self.labels.len(),
                    self.labels.len(),
                    self.n_features
                ),
                actual: self.samples.len().to_string(),
            });
        }
        if self.k == 0 || self.k > self.labels.len() {
            return Err(PinguinoError::InvalidHyperparameter {
                param: "k".to_string(),
                value: self.k.to_string(),
                constraint: format!("1 <= k <= {} training samples", self.labels.len()),
            });
        }
        let spanned = self.labels.iter().max().map_or(0, |&m| m + 1);
        if spanned != self.n_classes {
            return Err(PinguinoError::FormatError {
                message: format!(
                    "labels span {spanned} classes, model declares {}",
                    self.n_classes
                ),
            });
        }
        Ok(())
    }

    /// Predicts the class of a single sample.
    ///
    /// Votes tie-break toward the lowest class index, the same rule as
    /// an argmax over the vote counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the sample length
    /// doesn't match the fitted feature count.
    pub fn predict_one(&self, x: &[f32]) -> Result<usize> {
        let neighbors = self.nearest(x)?;

        let mut votes = vec![0.0f32; self.n_classes];
        for &(dist, label) in &neighbors {
            votes[label] += if self.weighted { vote_weight(dist) } else { 1.0 };
        }

        Ok(argmax(&votes))
    }

    /// Returns per-class probability estimates for a single sample.
    ///
    /// Probabilities are the proportion of the k nearest neighbors in
    /// each class (optionally weighted by inverse distance), normalized
    /// to sum 1.0. The vector has `n_classes` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the sample length
    /// doesn't match the fitted feature count.
    pub fn predict_proba_one(&self, x: &[f32]) -> Result<Vec<f32>> {
        let neighbors = self.nearest(x)?;

        let mut counts = vec![0.0f32; self.n_classes];
        for &(dist, label) in &neighbors {
            counts[label] += if self.weighted { vote_weight(dist) } else { 1.0 };
        }

        let total: f32 = counts.iter().sum();
        for count in &mut counts {
            *count /= total;
        }

        Ok(counts)
    }

    /// Finds the k nearest stored samples, closest first.
    fn nearest(&self, x: &[f32]) -> Result<Vec<(f32, usize)>> {
        if self.n_features == 0 {
            return Err("Model not fitted".into());
        }
        if x.len() != self.n_features {
            return Err(PinguinoError::DimensionMismatch {
                expected: self.n_features.to_string(),
                actual: x.len().to_string(),
            });
        }

        let mut distances: Vec<(f32, usize)> = self
            .samples
            .chunks_exact(self.n_features)
            .zip(self.labels.iter())
            .map(|(row, &label)| (self.distance(x, row), label))
            .collect();

        // NaN-free by construction: distances of finite inputs are finite.
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));
        distances.truncate(self.k);

        Ok(distances)
    }

    /// Distance between a query and one stored row.
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self.metric {
            DistanceMetric::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt(),
            DistanceMetric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            DistanceMetric::Minkowski(p) => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y).abs().powf(p))
                .sum::<f32>()
                .powf(1.0 / p),
        }
    }
}

/// Inverse-distance vote weight, saturating on coincident points.
fn vote_weight(dist: f32) -> f32 {
    if dist < 1e-10 {
        1.0
    } else {
        1.0 / dist
    }
}

/// Index of the largest value, first on ties; 0 on an empty slice.
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}


#[cfg(test)]
mod tests_knn_contract;
