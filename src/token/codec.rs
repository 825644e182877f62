//! Token codec implementations
//!
//! `TokenCodec` is the object-safe core working on JSON trees;
//! `TokenCodecExt` layers typed encode/decode on top of any codec.

use super::types::{CodecConfig, KeyPosition, TokenDecodeError, TokenKeys, FIRST_KEY, LAST_KEY};
use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Url-safe alphabet that encodes without padding but decodes either form
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Characters of a rejected token echoed into logs
const LOG_PREVIEW_CHARS: usize = 64;

// ============================================================================
// Core Trait
// ============================================================================

/// Encoder/decoder for pagination tokens
///
/// Implementations must be deterministic: the same keys always produce the
/// same token, and decoding has no side effects beyond logging.
pub trait TokenCodec: Send + Sync {
    /// Encode a pair of already-serialized boundary keys
    fn encode_keys(&self, keys: &TokenKeys) -> Result<String>;

    /// Decode a token into its boundary keys, reporting why it failed
    ///
    /// A key missing from the payload decodes as `Value::Null`.
    fn try_decode_keys(&self, token: &str) -> std::result::Result<TokenKeys, TokenDecodeError>;
}

impl<C: TokenCodec + ?Sized> TokenCodec for Arc<C> {
    fn encode_keys(&self, keys: &TokenKeys) -> Result<String> {
        (**self).encode_keys(keys)
    }

    fn try_decode_keys(&self, token: &str) -> std::result::Result<TokenKeys, TokenDecodeError> {
        (**self).try_decode_keys(token)
    }
}

impl<C: TokenCodec + ?Sized> TokenCodec for Box<C> {
    fn encode_keys(&self, keys: &TokenKeys) -> Result<String> {
        (**self).encode_keys(keys)
    }

    fn try_decode_keys(&self, token: &str) -> std::result::Result<TokenKeys, TokenDecodeError> {
        (**self).try_decode_keys(token)
    }
}

// ============================================================================
// Typed Extension
// ============================================================================

/// Typed encode/decode helpers available on every [`TokenCodec`]
pub trait TokenCodecExt: TokenCodec {
    /// Encode the first and last element keys of a chunk
    ///
    /// Fails with [`Error::Encoding`] if either key cannot be represented
    /// as JSON, or serializes to `null` (unit, `None`, NaN or infinite
    /// floats), which would decode as an absent key.
    fn encode<F, L>(&self, first_key: &F, last_key: &L) -> Result<String>
    where
        F: Serialize + ?Sized,
        L: Serialize + ?Sized,
    {
        let first_key = key_to_value(first_key, FIRST_KEY)?;
        let last_key = key_to_value(last_key, LAST_KEY)?;
        self.encode_keys(&TokenKeys {
            first_key,
            last_key,
        })
    }

    /// Strictly extract one boundary key as `T`
    ///
    /// A JSON `null` or missing key yields `Ok(None)`.
    fn try_decode_key<T: DeserializeOwned>(
        &self,
        token: &str,
        position: KeyPosition,
    ) -> std::result::Result<Option<T>, TokenDecodeError> {
        let value = self.try_decode_keys(token)?.into_key(position);
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| TokenDecodeError::KeyType {
                key: position.field_name(),
                message: e.to_string(),
            })
    }

    /// Leniently extract one boundary key as `T`
    ///
    /// Absent tokens yield `None` silently; undecodable tokens yield `None`
    /// and log a warning.
    fn decode_key<T: DeserializeOwned>(
        &self,
        token: Option<&str>,
        position: KeyPosition,
    ) -> Option<T> {
        let token = token?;
        match self.try_decode_key(token, position) {
            Ok(key) => key,
            Err(e) => {
                warn!(
                    token = preview(token),
                    key = position.field_name(),
                    error = %e,
                    "Invalid pagination token"
                );
                None
            }
        }
    }

    /// Extract the first element key
    fn decode_first<T: DeserializeOwned>(&self, token: Option<&str>) -> Option<T> {
        self.decode_key(token, KeyPosition::First)
    }

    /// Extract the last element key
    fn decode_last<T: DeserializeOwned>(&self, token: Option<&str>) -> Option<T> {
        self.decode_key(token, KeyPosition::Last)
    }

    /// Extract the first element key as text
    ///
    /// Numeric and boolean keys are rendered as their JSON text.
    fn decode_first_str(&self, token: Option<&str>) -> Option<String> {
        self.decode_key::<TextKey>(token, KeyPosition::First)
            .map(String::from)
    }

    /// Extract the last element key as text
    fn decode_last_str(&self, token: Option<&str>) -> Option<String> {
        self.decode_key::<TextKey>(token, KeyPosition::Last)
            .map(String::from)
    }
}

impl<C: TokenCodec + ?Sized> TokenCodecExt for C {}

/// Scalar key read back as text
#[derive(Deserialize)]
#[serde(untagged)]
enum TextKey {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<TextKey> for String {
    fn from(key: TextKey) -> Self {
        match key {
            TextKey::Text(s) => s,
            TextKey::Number(n) => n.to_string(),
            TextKey::Bool(b) => b.to_string(),
        }
    }
}

fn key_to_value<K: Serialize + ?Sized>(key: &K, field: &str) -> Result<Value> {
    let value = serde_json::to_value(key).map_err(|e| Error::encoding(format!("{field}: {e}")))?;
    if value.is_null() {
        return Err(Error::encoding(format!("{field}: not representable")));
    }
    Ok(value)
}

fn preview(token: &str) -> &str {
    token
        .char_indices()
        .nth(LOG_PREVIEW_CHARS)
        .map_or(token, |(idx, _)| &token[..idx])
}

// ============================================================================
// JSON + Base64url Codec
// ============================================================================

/// Token codec writing JSON key pairs as unpadded base64url
///
/// Immutable after construction; share one instance behind an `Arc` when
/// several chunk factories or sources need it.
#[derive(Debug, Clone, Default)]
pub struct JsonTokenCodec {
    config: CodecConfig,
}

impl JsonTokenCodec {
    /// Create a codec with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl TokenCodec for JsonTokenCodec {
    fn encode_keys(&self, keys: &TokenKeys) -> Result<String> {
        let json = serde_json::to_vec(keys).map_err(|e| Error::encoding(e.to_string()))?;
        let token = URL_SAFE_NO_PAD.encode(json);
        debug!(len = token.len(), "Encoded pagination token");
        Ok(token)
    }

    fn try_decode_keys(&self, token: &str) -> std::result::Result<TokenKeys, TokenDecodeError> {
        if token.is_empty() {
            return Err(TokenDecodeError::Empty);
        }

        if token.len() > self.config.max_token_len {
            return Err(TokenDecodeError::TooLong {
                len: token.len(),
                max: self.config.max_token_len,
            });
        }

        let bytes = if self.config.lenient_padding {
            URL_SAFE_LENIENT.decode(token)?
        } else {
            URL_SAFE_NO_PAD.decode(token)?
        };
        let payload: Value =
            serde_json::from_slice(&bytes).map_err(|e| TokenDecodeError::Json(e.to_string()))?;

        let Value::Object(mut fields) = payload else {
            return Err(TokenDecodeError::NotAnObject);
        };

        Ok(TokenKeys {
            first_key: fields.remove(FIRST_KEY).unwrap_or(Value::Null),
            last_key: fields.remove(LAST_KEY).unwrap_or(Value::Null),
        })
    }
}
