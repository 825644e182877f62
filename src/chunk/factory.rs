//! Chunk factory
//!
//! Builds chunks from fetched content, computing each chunk's token from the
//! keys of its first and last elements with an explicitly injected codec.

use super::types::Chunk;
use crate::error::Result;
use crate::request::PaginationRequest;
use crate::source::ChunkSource;
use crate::token::{JsonTokenCodec, TokenCodec, TokenCodecExt};
use serde::Serialize;
use tracing::{debug, warn};

/// Creates [`Chunk`]s and their tokens
#[derive(Debug, Clone)]
pub struct ChunkFactory<C = JsonTokenCodec> {
    codec: C,
}

impl<C: TokenCodec> ChunkFactory<C> {
    /// Create a factory using the given codec
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Codec used to encode chunk tokens
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Build a chunk from content fetched for `request`
    ///
    /// `key_fn` extracts the ordering key of an element. Empty content has
    /// no boundary keys and produces a chunk without a token; see
    /// [`Chunk::prev_request`] for what that means when walking back.
    pub fn create<T, K, F>(
        &self,
        content: Vec<T>,
        request: PaginationRequest,
        key_fn: F,
    ) -> Result<Chunk<T>>
    where
        K: Serialize,
        F: Fn(&T) -> K,
    {
        let token = match (content.first(), content.last()) {
            (Some(first), Some(last)) => Some(self.codec.encode(&key_fn(first), &key_fn(last))?),
            _ => None,
        };

        debug!(
            len = content.len(),
            relation = ?request.relation(),
            has_token = token.is_some(),
            "Created chunk"
        );

        Ok(Chunk::new(content, token, Some(request)))
    }

    /// Fetch content for `request` from a source and build its chunk
    pub fn fetch<T, S, K, F>(
        &self,
        source: &S,
        request: PaginationRequest,
        key_fn: F,
    ) -> Result<Chunk<T>>
    where
        S: ChunkSource<T> + ?Sized,
        K: Serialize,
        F: Fn(&T) -> K,
    {
        let content = source.fetch(&request)?;

        if content.len() > request.limit() {
            warn!(
                len = content.len(),
                limit = request.limit(),
                "Chunk source returned more elements than the requested page size"
            );
        }

        self.create(content, request, key_fn)
    }
}
