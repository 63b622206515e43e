//! The PGN model artifact format.
//!
//! A serialized classifier lives on disk as a small binary container:
//!
//! ```text
//! [4-byte magic: "PGN1"]
//! [1-byte version major][1-byte version minor]
//! [4-byte payload length (little-endian)]
//! [JSON payload: metadata + model]
//! [4-byte CRC32 of all preceding bytes (little-endian)]
//! ```
//!
//! Loading validates magic, version, length, and checksum before the
//! payload is deserialized, so every way an artifact can be missing,
//! truncated, corrupt, or incompatible surfaces as a distinct error.
//! There is no fallback model and no retry: a bad artifact is fatal
//! for the request that needed it.
//!
//! # Example
//!
//! ```
//! use pinguino::artifact::{self, SaveOptions};
//! use pinguino::classification::KnnClassifier;
//!
//! let mut knn = KnnClassifier::new(1);
//! knn.fit(&[0.0, 0.0, 5.0, 5.0], 2, &[0, 1]).unwrap();
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("toy.pgn");
//!
//! artifact::save(&knn, "knn-classifier", &path, SaveOptions::default()).unwrap();
//! let loaded: KnnClassifier = artifact::load(&path, "knn-classifier").unwrap();
//! assert_eq!(loaded.n_samples(), 2);
//! ```

use crate::error::{PinguinoError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Magic bytes opening every artifact - "PGN1"
pub const PGN_MAGIC: [u8; 4] = *b"PGN1";

/// Current container version.
pub const FORMAT_VERSION: (u8, u8) = (1, 0);

/// Byte offset of the JSON payload (magic + version pair + length).
const PAYLOAD_OFFSET: usize = 10;

/// Optional metadata recorded alongside the model.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    name: Option<String>,
    description: Option<String>,
}

impl SaveOptions {
    /// Sets the model name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What `inspect` reports about an artifact without deserializing the model.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    /// Model name, if recorded
    pub name: Option<String>,
    /// Description, if recorded
    pub description: Option<String>,
    /// Model type tag (e.g. "knn-classifier")
    pub model_type: String,
    /// Container version
    pub version: (u8, u8),
    /// JSON payload size in bytes
    pub payload_len: usize,
}

/// On-disk payload: metadata envelope plus the serialized model.
#[derive(Serialize, Deserialize)]
struct Payload<T> {
    metadata: Metadata,
    model: T,
}

#[derive(Serialize, Deserialize)]
struct Metadata {
    model_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Serializes a model into artifact bytes.
///
/// # Errors
///
/// Returns `Serialization` if the model cannot be encoded as JSON.
pub fn to_bytes<T: Serialize>(
    model: &T,
    model_type: &str,
    options: &SaveOptions,
) -> Result<Vec<u8>> {
    let payload = Payload {
        metadata: Metadata {
            model_type: model_type.to_string(),
            name: options.name.clone(),
            description: options.description.clone(),
        },
        model,
    };
    let payload_json =
        serde_json::to_vec(&payload).map_err(|e| PinguinoError::Serialization(e.to_string()))?;

    let payload_len = u32::try_from(payload_json.len()).map_err(|_| PinguinoError::FormatError {
        message: "payload exceeds u32 length".to_string(),
    })?;

    let mut bytes = Vec::with_capacity(PAYLOAD_OFFSET + payload_json.len() + 4);
    bytes.extend_from_slice(&PGN_MAGIC);
    bytes.push(FORMAT_VERSION.0);
    bytes.push(FORMAT_VERSION.1);
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&payload_json);

    let crc = crc32(&bytes);
    bytes.extend_from_slice(&crc.to_le_bytes());

    Ok(bytes)
}

/// Saves a model artifact to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn save<T: Serialize>(
    model: &T,
    model_type: &str,
    path: impl AsRef<Path>,
    options: SaveOptions,
) -> Result<()> {
    let bytes = to_bytes(model, model_type, &options)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Parses a model out of artifact bytes.
///
/// # Errors
///
/// Returns `FormatError` on bad magic, truncation, or a model type tag
/// other than `expected_type`; `UnsupportedVersion` when the artifact's
/// major version is newer than this build understands;
/// `ChecksumMismatch` on a corrupt body; `Serialization` on malformed
/// payload JSON.
pub fn from_bytes<T: DeserializeOwned>(data: &[u8], expected_type: &str) -> Result<T> {
    let payload = validate(data)?;

    let parsed: Payload<T> = serde_json::from_slice(payload)
        .map_err(|e| PinguinoError::Serialization(format!("invalid payload JSON: {e}")))?;

    if parsed.metadata.model_type != expected_type {
        return Err(PinguinoError::FormatError {
            message: format!(
                "model type mismatch: expected {expected_type:?}, got {:?}",
                parsed.metadata.model_type
            ),
        });
    }

    Ok(parsed.model)
}

/// Loads a model artifact from `path`.
///
/// Fatal on any failure: a missing or unreadable file is an I/O error,
/// and a present-but-bad file reports exactly what is wrong with it.
///
/// # Errors
///
/// See [`from_bytes`]; additionally returns `Io` if the file cannot be read.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>, expected_type: &str) -> Result<T> {
    let data = fs::read(path)?;
    from_bytes(&data, expected_type)
}

/// Reads artifact metadata without deserializing the model itself.
///
/// # Errors
///
/// Same validation ladder as [`load`].
pub fn inspect(path: impl AsRef<Path>) -> Result<ArtifactInfo> {
    let data = fs::read(path)?;
    let payload = validate(&data)?;

    // Only the metadata envelope is decoded; the model stays opaque.
    #[derive(Deserialize)]
    struct Envelope {
        metadata: Metadata,
    }
    let envelope: Envelope = serde_json::from_slice(payload)
        .map_err(|e| PinguinoError::Serialization(format!("invalid payload JSON: {e}")))?;

    Ok(ArtifactInfo {
        name: envelope.metadata.name,
        description: envelope.metadata.description,
        model_type: envelope.metadata.model_type,
        version: (data[4], data[5]),
        payload_len: payload.len(),
    })
}

/// Runs the container validation ladder and returns the payload slice.
fn validate(data: &[u8]) -> Result<&[u8]> {
    if data.len() < PAYLOAD_OFFSET + 4 {
        return Err(PinguinoError::FormatError {
            message: format!("file too short: {} bytes", data.len()),
        });
    }

    let magic = &data[..4];
    if magic != PGN_MAGIC {
        return Err(PinguinoError::FormatError {
            message: format!("invalid magic: expected PGN1, got {magic:?}"),
        });
    }

    let version = (data[4], data[5]);
    if version.0 > FORMAT_VERSION.0 {
        return Err(PinguinoError::UnsupportedVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }

    let payload_len = u32::from_le_bytes([data[6], data[7], data[8], data[9]]) as usize;
    let expected_len = PAYLOAD_OFFSET + payload_len + 4;
    if data.len() != expected_len {
        return Err(PinguinoError::FormatError {
            message: format!("truncated artifact: {} of {expected_len} bytes", data.len()),
        });
    }

    let body_end = PAYLOAD_OFFSET + payload_len;
    let expected_crc = u32::from_le_bytes([
        data[body_end],
        data[body_end + 1],
        data[body_end + 2],
        data[body_end + 3],
    ]);
    let actual_crc = crc32(&data[..body_end]);
    if actual_crc != expected_crc {
        return Err(PinguinoError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    Ok(&data[PAYLOAD_OFFSET..body_end])
}

/// CRC32 (IEEE polynomial), table built at compile time.
fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in data {
        let idx = ((crc ^ u32::from(byte)) & 0xFF) as usize;
        crc = CRC32_TABLE[idx] ^ (crc >> 8);
    }
    !crc
}

const CRC32_TABLE: [u32; 256] = build_crc32_table();

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests;
