// =========================================================================
// FALSIFY-KNN: classifier contract tests, kept beside the implementation.
//
// References:
//   - Cover & Hart (1967) "Nearest Neighbor Pattern Classification"
// =========================================================================

use super::*;

#[rustfmt::skip]
fn three_clusters() -> (Vec<f32>, Vec<usize>) {
    let x = vec![
        0.0, 0.0,    0.1, 0.1,    0.2, 0.0,
        10.0, 10.0,  10.1, 10.1,  10.0, 10.2,
        20.0, 0.0,   20.1, 0.1,   20.0, 0.2,
    ];
    let y = vec![0, 0, 0, 1, 1, 1, 2, 2, 2];
    (x, y)
}

/// FALSIFY-KNN-001: Predictions stay inside the training label set
#[test]
fn falsify_knn_001_predictions_in_label_range() {
    let (x, y) = three_clusters();
    let mut knn = KnnClassifier::new(3);
    knn.fit(&x, 2, &y).expect("fit");

    for query in [[5.0, 5.0], [15.0, 5.0], [-3.0, -3.0], [100.0, 100.0]] {
        let p = knn.predict_one(&query).expect("predict");
        assert!(p <= 2, "FALSIFIED KNN-001: prediction = {p}, not in {{0, 1, 2}}");
    }
}

/// FALSIFY-KNN-002: Well-separated clusters classified correctly
#[test]
fn falsify_knn_002_separable_data() {
    let (x, y) = three_clusters();
    let mut knn = KnnClassifier::new(3);
    knn.fit(&x, 2, &y).expect("fit");

    for (row, &label) in x.chunks_exact(2).zip(&y) {
        assert_eq!(
            knn.predict_one(row).expect("predict"),
            label,
            "FALSIFIED KNN-002: kNN cannot classify well-separated clusters"
        );
    }
}

/// FALSIFY-KNN-003: Probability mass concentrates on the predicted class
#[test]
fn falsify_knn_003_proba_consistent_with_vote() {
    let (x, y) = three_clusters();
    let mut knn = KnnClassifier::new(3);
    knn.fit(&x, 2, &y).expect("fit");

    // Deep inside cluster 1, all three neighbors vote the same way.
    let proba = knn.predict_proba_one(&[10.05, 10.05]).expect("proba");
    assert_eq!(
        proba,
        vec![0.0, 1.0, 0.0],
        "FALSIFIED KNN-003: unanimous neighbors must give probability 1"
    );
}

/// FALSIFY-KNN-004: Deterministic predictions
#[test]
fn falsify_knn_004_deterministic() {
    let (x, y) = three_clusters();
    let mut knn = KnnClassifier::new(1);
    knn.fit(&x, 2, &y).expect("fit");

    let p1: Vec<usize> = x
        .chunks_exact(2)
        .map(|row| knn.predict_one(row).expect("predict 1"))
        .collect();
    let p2: Vec<usize> = x
        .chunks_exact(2)
        .map(|row| knn.predict_one(row).expect("predict 2"))
        .collect();
    assert_eq!(p1, p2, "FALSIFIED KNN-004: predictions differ on same input");
}

/// FALSIFY-KNN-005: k = 1 reproduces training labels exactly
#[test]
fn falsify_knn_005_one_nearest_memorizes() {
    let (x, y) = three_clusters();
    let mut knn = KnnClassifier::new(1);
    knn.fit(&x, 2, &y).expect("fit");

    for (row, &label) in x.chunks_exact(2).zip(&y) {
        assert_eq!(
            knn.predict_one(row).expect("predict"),
            label,
            "FALSIFIED KNN-005: 1-NN must memorize its training set"
        );
    }
}
