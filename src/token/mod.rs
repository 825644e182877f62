//! Pagination token module
//!
//! Encodes the boundary keys of a chunk into an opaque continuation token
//! and extracts them back out.
//!
//! # Wire format
//!
//! A token is the unpadded base64url encoding of a UTF-8 JSON object:
//!
//! ```text
//! {"first_key": <first element key>, "last_key": <last element key>}
//! ```
//!
//! Encoders always emit `first_key` before `last_key`; decoders do not rely
//! on field order. Keys may be any JSON value.
//!
//! # Failure policy
//!
//! Encoding errors are defects and always propagate as
//! [`Error::Encoding`](crate::Error::Encoding). Decoding reads untrusted
//! client input: the lenient `decode_*` methods resolve bad tokens to `None`
//! and log a warning, while `try_decode_*` report a [`TokenDecodeError`].

mod codec;
mod types;

pub use codec::{JsonTokenCodec, TokenCodec, TokenCodecExt};
pub use types::{CodecConfig, KeyPosition, TokenDecodeError, TokenKeys, DEFAULT_MAX_TOKEN_LEN};
