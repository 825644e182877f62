//! Chunk source module
//!
//! The fetch collaborator interface consumed by
//! [`ChunkFactory::fetch`](crate::chunk::ChunkFactory::fetch), plus an
//! in-memory implementation.
//!
//! # Contract
//!
//! A source returns at most `max_page_size` elements in the request's
//! `direction` order, resuming strictly after (`Next`) the token's last key
//! or strictly before (`Prev`) its first key. It returns fewer elements
//! only when exhausted; a short page is how a chunk detects the end.

mod memory;

pub use memory::MemorySource;

use crate::error::Result;
use crate::request::PaginationRequest;

/// Executes a pagination request against an ordered store
pub trait ChunkSource<T> {
    /// Fetch the elements selected by `request`
    fn fetch(&self, request: &PaginationRequest) -> Result<Vec<T>>;
}

impl<T, F> ChunkSource<T> for F
where
    F: Fn(&PaginationRequest) -> Result<Vec<T>>,
{
    fn fetch(&self, request: &PaginationRequest) -> Result<Vec<T>> {
        self(request)
    }
}

#[cfg(test)]
mod tests;
