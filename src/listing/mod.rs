//! Listing data model and inbound decode
//!
//! The listing-retrieval collaborator hands the engine a deserialized JSON
//! array of `{key, size}` records, the shape the mirror's storage API
//! returns. Decode fails fast on records without a usable key or size rather
//! than skipping them, so upstream data-quality issues surface instead of
//! being masked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One entry in a storage listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Opaque storage key; the sole basis for classification and version
    /// extraction
    pub key: String,
    /// Byte count, passed through to presentation unexamined
    pub size: u64,
}

impl Artifact {
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

/// Inbound decode failure
///
/// The whole invocation fails on the first malformed record; records are
/// never skipped silently and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("listing payload is not a JSON array")]
    NotAnArray,

    #[error("listing record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("listing record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("listing record {index}: field `{field}` is not a {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// Decode a deserialized listing payload into artifacts
///
/// Accepts the raw JSON value a bucket-listing API returns and validates the
/// shape of every record before the engine touches it.
pub fn decode(value: &Value) -> Result<Vec<Artifact>, MalformedInputError> {
    let records = value.as_array().ok_or(MalformedInputError::NotAnArray)?;

    let mut artifacts = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let record = record
            .as_object()
            .ok_or(MalformedInputError::NotAnObject { index })?;

        let key = record
            .get("key")
            .ok_or(MalformedInputError::MissingField {
                index,
                field: "key",
            })?
            .as_str()
            .ok_or(MalformedInputError::WrongType {
                index,
                field: "key",
                expected: "string",
            })?;

        let size = record
            .get("size")
            .ok_or(MalformedInputError::MissingField {
                index,
                field: "size",
            })?
            .as_u64()
            .ok_or(MalformedInputError::WrongType {
                index,
                field: "size",
                expected: "non-negative integer",
            })?;

        artifacts.push(Artifact::new(key, size));
    }

    Ok(artifacts)
}
