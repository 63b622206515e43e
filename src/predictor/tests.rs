use super::*;
use crate::artifact::SaveOptions;
use crate::schema::{Island, Sex};
use tempfile::tempdir;

/// Twelve penguin-shaped rows, four per species, in training column order.
#[rustfmt::skip]
fn training_set() -> (Vec<f32>, Vec<usize>) {
    let x = vec![
        // island, culmen_len, culmen_depth, flipper_len, body_mass, sex, d15n, d13c
        2.0, 38.8, 18.3, 187.0, 3700.0, 0.0, 8.9, -25.9,
        2.0, 40.1, 18.9, 190.0, 3900.0, 1.0, 8.8, -25.8,
        1.0, 37.3, 17.8, 186.0, 3500.0, 0.0, 9.0, -25.7,
        0.0, 39.5, 18.6, 189.0, 3800.0, 1.0, 8.7, -25.9,
        1.0, 48.8, 18.4, 196.0, 3730.0, 0.0, 9.3, -24.5,
        1.0, 49.5, 19.0, 200.0, 3800.0, 1.0, 9.4, -24.6,
        1.0, 46.6, 17.8, 193.0, 3400.0, 0.0, 9.2, -24.7,
        1.0, 50.2, 18.7, 198.0, 3775.0, 1.0, 9.3, -24.4,
        0.0, 47.5, 15.0, 217.0, 4900.0, 0.0, 8.3, -26.2,
        0.0, 49.9, 14.8, 221.0, 5400.0, 1.0, 8.4, -26.1,
        0.0, 45.1, 14.5, 215.0, 5000.0, 0.0, 8.2, -26.3,
        0.0, 50.5, 15.9, 225.0, 5500.0, 1.0, 8.3, -26.0,
    ];
    let y = vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];
    (x, y)
}

fn fitted_model(k: usize) -> KnnClassifier {
    let (x, y) = training_set();
    let mut knn = KnnClassifier::new(k);
    knn.fit(&x, 8, &y).expect("fit");
    knn
}

#[test]
fn test_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("penguin_model.pgn");

    artifact::save(
        &fitted_model(3),
        MODEL_TYPE,
        &path,
        SaveOptions::default().with_name("penguin-knn"),
    )
    .expect("save");

    let predictor = SpeciesPredictor::load(&path).expect("load");
    assert_eq!(predictor.model().n_features(), FEATURE_COUNT);
    assert_eq!(predictor.model().n_classes(), N_SPECIES);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    assert!(SpeciesPredictor::load(dir.path().join("absent.pgn")).is_err());
}

#[test]
fn test_from_model_rejects_wrong_feature_count() {
    let mut knn = KnnClassifier::new(1);
    knn.fit(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0], 2, &[0, 1, 2])
        .expect("fit");

    let err = SpeciesPredictor::from_model(knn).expect_err("2 features");
    assert!(err.to_string().contains("8 features"));
}

#[test]
fn test_from_model_rejects_wrong_class_count() {
    let mut knn = KnnClassifier::new(1);
    // 8 features but only two classes.
    knn.fit(&[0.0; 16], 8, &[0, 1]).expect("fit");

    let err = SpeciesPredictor::from_model(knn).expect_err("2 classes");
    assert!(err.to_string().contains("3 classes"));
}

/// An internally inconsistent model that serde happily deserializes:
/// one training row, but its label is outside the declared class range.
fn tampered_model() -> KnnClassifier {
    let json = r#"{"k":1,"metric":"Euclidean","weighted":false,
        "samples":[0.0,44.0,17.0,200.0,4200.0,0.0,8.7,-25.6],
        "labels":[5],"n_features":8,"n_classes":3}"#;
    serde_json::from_str(json).expect("fields deserialize")
}

#[test]
fn test_from_model_rejects_inconsistent_labels() {
    // Shape checks alone would pass this model; predicting with it
    // would index past the probability array.
    let err = SpeciesPredictor::from_model(tampered_model()).expect_err("label 5 with 3 classes");
    assert!(err.to_string().contains("labels span"));
}

#[test]
fn test_load_rejects_inconsistent_artifact() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tampered.pgn");
    artifact::save(&tampered_model(), MODEL_TYPE, &path, SaveOptions::default()).expect("save");

    assert!(SpeciesPredictor::load(&path).is_err());
}

#[test]
fn test_documented_scenario() {
    // Biscoe(0), FEMALE(0), 44.0, 17.0, 200.0, 4200.0, 8.7, -25.6
    let predictor = SpeciesPredictor::from_model(fitted_model(3)).expect("valid model");

    let record = PenguinRecord {
        island: Island::Biscoe,
        sex: Sex::Female,
        culmen_length_mm: 44.0,
        culmen_depth_mm: 17.0,
        flipper_length_mm: 200.0,
        body_mass_g: 4200.0,
        delta_15_n: 8.7,
        delta_13_c: -25.6,
    };
    assert_eq!(
        record.to_features(),
        [0.0, 44.0, 17.0, 200.0, 4200.0, 0.0, 8.7, -25.6]
    );

    let prediction = predictor.predict(&record).expect("predict");

    assert!(Species::ALL.contains(&prediction.species));
    let sum: f32 = prediction.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
    for &p in &prediction.probabilities {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn test_culmen_length_boundaries_accepted() {
    let predictor = SpeciesPredictor::from_model(fitted_model(3)).expect("valid model");

    for culmen_length_mm in [30.0, 60.0] {
        let record = PenguinRecord {
            culmen_length_mm,
            ..PenguinRecord::default()
        };
        assert!(
            predictor.predict(&record).is_ok(),
            "boundary culmen length {culmen_length_mm} must be accepted"
        );
    }
}

#[test]
fn test_confidence_matches_predicted_species() {
    let predictor = SpeciesPredictor::from_model(fitted_model(3)).expect("valid model");
    let prediction = predictor.predict(&PenguinRecord::default()).expect("predict");

    let max = prediction
        .probabilities
        .iter()
        .fold(0.0f32, |acc, &p| acc.max(p));
    assert_eq!(prediction.confidence(), max);
}

#[test]
fn test_breakdown_alignment() {
    let predictor = SpeciesPredictor::from_model(fitted_model(3)).expect("valid model");
    let prediction = predictor.predict(&PenguinRecord::default()).expect("predict");

    let pairs: Vec<(Species, f32)> = prediction.breakdown().collect();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].0, Species::Adelie);
    assert_eq!(pairs[1].0, Species::Chinstrap);
    assert_eq!(pairs[2].0, Species::Gentoo);
}

#[test]
fn test_prediction_deterministic() {
    let predictor = SpeciesPredictor::from_model(fitted_model(5)).expect("valid model");
    let record = PenguinRecord::default();

    let first = predictor.predict(&record).expect("predict");
    for _ in 0..5 {
        assert_eq!(predictor.predict(&record).expect("predict"), first);
    }
}

#[test]
fn test_gentoo_cluster_classified_gentoo() {
    let predictor = SpeciesPredictor::from_model(fitted_model(3)).expect("valid model");

    // Long flippers and heavy body, right in the Gentoo cluster.
    let record = PenguinRecord {
        island: Island::Biscoe,
        sex: Sex::Female,
        culmen_length_mm: 47.0,
        culmen_depth_mm: 15.0,
        flipper_length_mm: 218.0,
        body_mass_g: 5100.0,
        delta_15_n: 8.3,
        delta_13_c: -26.2,
    };

    let prediction = predictor.predict(&record).expect("predict");
    assert_eq!(prediction.species, Species::Gentoo);
    assert!(prediction.confidence() > 0.5);
}

#[test]
fn test_shared_loads_once_and_caches() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("shared_model.pgn");
    artifact::save(&fitted_model(3), MODEL_TYPE, &path, SaveOptions::default()).expect("save");

    let first = shared(&path).expect("first load");
    let second = shared(&path).expect("cached");
    assert!(std::ptr::eq(first, second));

    // Once cached, the path argument is ignored entirely.
    let third = shared(dir.path().join("does_not_exist.pgn")).expect("cache hit");
    assert!(std::ptr::eq(first, third));
}

#[test]
fn test_inspect_passthrough() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model.pgn");
    artifact::save(
        &fitted_model(3),
        MODEL_TYPE,
        &path,
        SaveOptions::default().with_name("penguin-knn"),
    )
    .expect("save");

    let info = inspect(&path).expect("inspect");
    assert_eq!(info.model_type, MODEL_TYPE);
    assert_eq!(info.name.as_deref(), Some("penguin-knn"));
}
