// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Chunks
//!
//! Cursor-based (keyset) pagination: chunks of ordered results that carry
//! an opaque token describing their boundary keys, and the requests that
//! move forward or backward from them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_chunks::{ChunkFactory, JsonTokenCodec, MemorySource, PaginationRequest};
//! use std::num::NonZeroU32;
//!
//! let codec = JsonTokenCodec::new();
//! let source = MemorySource::new((1..=50).collect(), |n: &u32| *n, codec.clone());
//! let factory = ChunkFactory::new(codec);
//!
//! let request = PaginationRequest::with_page_size(NonZeroU32::new(20).unwrap());
//! let mut chunk = factory.fetch(&source, request, |n: &u32| *n)?;
//! while let Some(next) = chunk.next_request() {
//!     chunk = factory.fetch(&source, next, |n: &u32| *n)?;
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PaginationRequest { token, relation, max_page_size, dir }   │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │  PagingConfig::resolve
//!                                ▼
//! ┌──────────────┐   fetch   ┌──────────────┐   create   ┌──────────┐
//! │ ChunkSource  │ ────────▶ │ ChunkFactory │ ─────────▶ │ Chunk<T> │
//! │ (user store) │           │              │            │          │
//! └──────▲───────┘           └──────┬───────┘            └────┬─────┘
//!        │ decode_first/last        │ encode(first, last)     │
//!        │                   ┌──────▼───────┐                 │
//!        └────────────────── │  TokenCodec  │  next_request / │
//!                            └──────────────┘  prev_request ──┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Sort direction and pagination relation
pub mod types;

/// Pagination token encoding and decoding
pub mod token;

/// Pagination requests
pub mod request;

/// Chunks of paged results
pub mod chunk;

/// Sources chunks are fetched from
pub mod source;

/// Paging defaults and limits
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use chunk::{Chunk, ChunkFactory};
pub use config::PagingConfig;
pub use request::PaginationRequest;
pub use source::{ChunkSource, MemorySource};
pub use token::{JsonTokenCodec, TokenCodec, TokenCodecExt, TokenDecodeError, TokenKeys};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
