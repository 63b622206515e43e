use super::*;
use crate::classification::KnnClassifier;
use tempfile::tempdir;

const MODEL_TYPE: &str = "knn-classifier";

fn toy_model() -> KnnClassifier {
    let mut knn = KnnClassifier::new(1);
    knn.fit(&[0.0, 0.0, 5.0, 5.0, 9.0, 0.0], 2, &[0, 1, 2])
        .expect("fit toy model");
    knn
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model.pgn");

    let model = toy_model();
    save(
        &model,
        MODEL_TYPE,
        &path,
        SaveOptions::default()
            .with_name("toy")
            .with_description("three points"),
    )
    .expect("save");

    let loaded: KnnClassifier = load(&path, MODEL_TYPE).expect("load");
    assert_eq!(loaded.n_samples(), 3);
    assert_eq!(loaded.n_classes(), 3);
    assert_eq!(
        loaded.predict_one(&[4.9, 4.9]).expect("predict"),
        model.predict_one(&[4.9, 4.9]).expect("predict")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope.pgn");

    let err = load::<KnnClassifier>(&path, MODEL_TYPE).expect_err("missing file");
    assert!(matches!(err, crate::error::PinguinoError::Io(_)));
}

#[test]
fn test_bad_magic_rejected() {
    let mut bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");
    bytes[0] = b'X';

    let err = from_bytes::<KnnClassifier>(&bytes, MODEL_TYPE).expect_err("bad magic");
    assert!(err.to_string().contains("magic"));
}

#[test]
fn test_too_short_rejected() {
    let err = from_bytes::<KnnClassifier>(b"PGN1", MODEL_TYPE).expect_err("short");
    assert!(err.to_string().contains("too short"));
}

#[test]
fn test_truncated_payload_rejected() {
    let bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");
    let truncated = &bytes[..bytes.len() - 10];

    let err = from_bytes::<KnnClassifier>(truncated, MODEL_TYPE).expect_err("truncated");
    assert!(err.to_string().contains("truncated"));
}

#[test]
fn test_corrupt_body_fails_checksum() {
    let mut bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");
    // Flip one payload byte; length and trailer stay intact.
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0xFF;

    let err = from_bytes::<KnnClassifier>(&bytes, MODEL_TYPE).expect_err("corrupt");
    assert!(
        matches!(err, crate::error::PinguinoError::ChecksumMismatch { .. }),
        "expected checksum mismatch, got: {err}"
    );
}

#[test]
fn test_newer_major_version_rejected() {
    let mut bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");
    bytes[4] = FORMAT_VERSION.0 + 1;

    let err = from_bytes::<KnnClassifier>(&bytes, MODEL_TYPE).expect_err("future version");
    assert!(
        matches!(err, crate::error::PinguinoError::UnsupportedVersion { .. }),
        "expected version error, got: {err}"
    );
}

#[test]
fn test_newer_minor_version_accepted() {
    // Minor bumps are additive; version check only gates on major.
    // The CRC covers the version bytes, so recompute the trailer.
    let mut bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");
    bytes[5] = FORMAT_VERSION.1 + 1;
    let body_end = bytes.len() - 4;
    let crc = super::crc32(&bytes[..body_end]);
    bytes[body_end..].copy_from_slice(&crc.to_le_bytes());

    assert!(from_bytes::<KnnClassifier>(&bytes, MODEL_TYPE).is_ok());
}

#[test]
fn test_model_type_mismatch_rejected() {
    let bytes = to_bytes(&toy_model(), MODEL_TYPE, &SaveOptions::default()).expect("encode");

    let err = from_bytes::<KnnClassifier>(&bytes, "linear-regression").expect_err("wrong type");
    assert!(err.to_string().contains("model type mismatch"));
}

#[test]
fn test_garbage_payload_is_serialization_error() {
    // Valid container carrying a payload that is not a model.
    let bytes = to_bytes(&vec![1, 2, 3], MODEL_TYPE, &SaveOptions::default()).expect("encode");

    let err = from_bytes::<KnnClassifier>(&bytes, MODEL_TYPE).expect_err("not a model");
    assert!(matches!(
        err,
        crate::error::PinguinoError::Serialization(_)
    ));
}

#[test]
fn test_inspect_reports_metadata() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("model.pgn");

    save(
        &toy_model(),
        MODEL_TYPE,
        &path,
        SaveOptions::default()
            .with_name("penguin-knn")
            .with_description("palmer penguins, k=5"),
    )
    .expect("save");

    let info = inspect(&path).expect("inspect");
    assert_eq!(info.name.as_deref(), Some("penguin-knn"));
    assert_eq!(info.description.as_deref(), Some("palmer penguins, k=5"));
    assert_eq!(info.model_type, MODEL_TYPE);
    assert_eq!(info.version, FORMAT_VERSION);
    assert!(info.payload_len > 0);
}

#[test]
fn test_inspect_without_optional_metadata() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bare.pgn");

    save(&toy_model(), MODEL_TYPE, &path, SaveOptions::default()).expect("save");

    let info = inspect(&path).expect("inspect");
    assert_eq!(info.name, None);
    assert_eq!(info.description, None);
}

#[test]
fn test_crc32_known_vector() {
    // CRC32("123456789") = 0xCBF43926, the standard check value.
    assert_eq!(super::crc32(b"123456789"), 0xCBF4_3926);
}
