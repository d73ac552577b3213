//! Serialization of decoded messages.
//!
//! The decoder hands out plain values; turning them into bytes for a
//! downstream consumer is a separate, swappable concern driven entirely
//! through the serde contract on [`Message`](crate::Message) and its
//! parts.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Wire format for serialized messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON format (human-readable, good for debugging).
    #[default]
    Json,

    /// CBOR format (compact binary, better for high-volume flow streams).
    Cbor,
}

impl Format {
    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Cbor => "application/cbor",
        }
    }
}

/// Failure while encoding or decoding a serialized message.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR serialization error: {0}")]
    Cbor(String),
}

/// Encode a value to bytes using the specified format.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<Vec<u8>, SerializeError> {
    match format {
        Format::Json => serde_json::to_vec(value).map_err(SerializeError::from),
        Format::Cbor => {
            let mut buf = Vec::new();
            ciborium::into_writer(value, &mut buf).map_err(|e| SerializeError::Cbor(e.to_string()))?;
            Ok(buf)
        }
    }
}

/// Decode bytes back into a value using the specified format.
pub fn decode<T: DeserializeOwned>(data: &[u8], format: Format) -> Result<T, SerializeError> {
    match format {
        Format::Json => serde_json::from_slice(data).map_err(SerializeError::from),
        Format::Cbor => ciborium::from_reader(data).map_err(|e| SerializeError::Cbor(e.to_string())),
    }
}
