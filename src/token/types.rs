//! Token types
//!
//! Decoded key pairs, decode errors and codec configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// JSON field holding the first element key
pub(crate) const FIRST_KEY: &str = "first_key";

/// JSON field holding the last element key
pub(crate) const LAST_KEY: &str = "last_key";

/// Upper bound on accepted token length, in characters
pub const DEFAULT_MAX_TOKEN_LEN: usize = 8 * 1024;

/// Boundary keys carried by a pagination token
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenKeys {
    /// Key of the first element of the chunk, in source order
    pub first_key: Value,
    /// Key of the last element of the chunk, in source order
    pub last_key: Value,
}

impl TokenKeys {
    /// Create a key pair
    pub fn new(first_key: impl Into<Value>, last_key: impl Into<Value>) -> Self {
        Self {
            first_key: first_key.into(),
            last_key: last_key.into(),
        }
    }

    /// Take the key at the given position
    pub fn into_key(self, position: KeyPosition) -> Value {
        match position {
            KeyPosition::First => self.first_key,
            KeyPosition::Last => self.last_key,
        }
    }
}

/// Which boundary key to extract from a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPosition {
    /// The chunk's first element key
    First,
    /// The chunk's last element key
    Last,
}

impl KeyPosition {
    /// JSON field name used on the wire
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::First => FIRST_KEY,
            Self::Last => LAST_KEY,
        }
    }
}

/// Why a pagination token could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenDecodeError {
    /// Token is an empty string
    #[error("pagination token is empty")]
    Empty,

    /// Token is longer than the configured maximum
    #[error("pagination token exceeds max length: {len} chars (max {max})")]
    TooLong {
        /// Length of the rejected token
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Token is not base64url text
    #[error("pagination token is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded payload is not JSON
    #[error("pagination token payload is not valid JSON: {0}")]
    Json(String),

    /// Decoded payload is JSON but not an object
    #[error("pagination token payload is not a JSON object")]
    NotAnObject,

    /// A key does not deserialize into the requested type
    #[error("'{key}' cannot be read as the requested type: {message}")]
    KeyType {
        /// Wire name of the key
        key: &'static str,
        /// Deserialization error
        message: String,
    },
}

/// Configuration for [`JsonTokenCodec`](super::JsonTokenCodec)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Tokens longer than this are rejected without decoding
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,

    /// Accept padded tokens as well as unpadded ones
    #[serde(default = "default_lenient_padding")]
    pub lenient_padding: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_token_len: default_max_token_len(),
            lenient_padding: default_lenient_padding(),
        }
    }
}

fn default_max_token_len() -> usize {
    DEFAULT_MAX_TOKEN_LEN
}

fn default_lenient_padding() -> bool {
    true
}
