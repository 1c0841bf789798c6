//! Versioned JSON envelopes for persisted records.
//!
//! Every value is stored as `{"version": N, "data": ...}` under a fixed key.
//! Decoding validates both the envelope and the payload shape and reports
//! failure through [`DecodeError`]; what to do about a bad record is the
//! caller's decision.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value persisted under a single well-known key.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Storage key for this record.
    const KEY: &'static str;
    /// Schema version written into the envelope.
    const VERSION: u32;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("unsupported record version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    data: serde_json::Value,
}

/// Serialize a record into its envelope.
///
/// # Errors
///
/// Returns `serde_json::Error` if the value cannot be represented as JSON.
pub fn encode<T: Record>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: T::VERSION,
        data: value,
    })
}

/// Parse and validate an envelope produced by [`encode`].
///
/// # Errors
///
/// Returns `DecodeError::Malformed` for non-JSON input or a payload of the
/// wrong shape, and `DecodeError::UnsupportedVersion` if the envelope was
/// written by a different schema version.
pub fn decode<T: Record>(raw: &str) -> Result<T, DecodeError> {
    let envelope: RawEnvelope =
        serde_json::from_str(raw).map_err(|err| DecodeError::Malformed(err.to_string()))?;
    if envelope.version != T::VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: envelope.version,
            expected: T::VERSION,
        });
    }
    serde_json::from_value(envelope.data).map_err(|err| DecodeError::Malformed(err.to_string()))
}
