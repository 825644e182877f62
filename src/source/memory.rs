//! In-memory chunk source
//!
//! Keyset pagination over a vector held in memory. Useful for tests, demos
//! and small reference data sets.

use super::ChunkSource;
use crate::error::Result;
use crate::request::PaginationRequest;
use crate::token::{JsonTokenCodec, TokenCodec, TokenCodecExt};
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::fmt;

/// Ordered in-memory source
///
/// Items are sorted by key on construction. Keys must be unique: elements
/// sharing a key with a chunk boundary are skipped by the next request.
pub struct MemorySource<K, T, C = JsonTokenCodec> {
    items: Vec<T>,
    key_fn: fn(&T) -> K,
    codec: C,
}

impl<K: Ord, T, C: TokenCodec> MemorySource<K, T, C> {
    /// Create a source over `items`, ordered by `key_fn`
    ///
    /// `codec` must be the codec that encodes the tokens this source will be
    /// asked to resume from.
    pub fn new(mut items: Vec<T>, key_fn: fn(&T) -> K, codec: C) -> Self {
        items.sort_by_key(key_fn);
        Self {
            items,
            key_fn,
            codec,
        }
    }

    /// Items in ascending key order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K, T, C> ChunkSource<T> for MemorySource<K, T, C>
where
    K: Ord + DeserializeOwned,
    T: Clone,
    C: TokenCodec,
{
    fn fetch(&self, request: &PaginationRequest) -> Result<Vec<T>> {
        let direction = request.direction().unwrap_or_default();
        let limit = request.limit();

        let ordered: Vec<&T> = if direction.is_descending() {
            self.items.iter().rev().collect()
        } else {
            self.items.iter().collect()
        };

        // An undecodable token is treated as no resume point
        let page: Vec<&T> = if request.is_forward() {
            match self.codec.decode_last::<K>(request.token()) {
                Some(last_key) => ordered
                    .into_iter()
                    .filter(|item| {
                        direction.compare(&(self.key_fn)(*item), &last_key) == Ordering::Greater
                    })
                    .take(limit)
                    .collect(),
                None => ordered.into_iter().take(limit).collect(),
            }
        } else {
            match self.codec.decode_first::<K>(request.token()) {
                Some(first_key) => {
                    let before: Vec<&T> = ordered
                        .into_iter()
                        .filter(|item| {
                            direction.compare(&(self.key_fn)(*item), &first_key) == Ordering::Less
                        })
                        .collect();
                    let skip = before.len().saturating_sub(limit);
                    before.into_iter().skip(skip).collect()
                }
                None => ordered.into_iter().take(limit).collect(),
            }
        };

        Ok(page.into_iter().cloned().collect())
    }
}

impl<K, T: fmt::Debug, C: fmt::Debug> fmt::Debug for MemorySource<K, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySource")
            .field("items", &self.items)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
