//! Chunk container
//!
//! A read-only snapshot of one page of results. Navigation predicates are
//! computed from the request that produced the chunk; the chunk's own token
//! is handed on unmodified and never decoded here.

use crate::request::PaginationRequest;
use crate::types::{PaginationRelation, SortDirection};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// One page of ordered results plus its continuation token
///
/// Identity (`PartialEq`, `Hash`) covers the content and the token only;
/// two chunks with the same elements and token are the same chunk no matter
/// which request produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk<T> {
    content: Vec<T>,

    #[serde(rename = "pagination_token")]
    token: Option<String>,

    #[serde(skip)]
    source_request: Option<PaginationRequest>,
}

impl<T> Chunk<T> {
    /// Create a chunk from fetched content, its token and the request that produced it
    pub fn new(
        content: Vec<T>,
        token: Option<String>,
        source_request: Option<PaginationRequest>,
    ) -> Self {
        Self {
            content,
            token,
            source_request,
        }
    }

    /// Elements in source order
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Take the elements out of the chunk
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Token describing this chunk's key range
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Request that produced this chunk
    pub fn source_request(&self) -> Option<&PaginationRequest> {
        self.source_request.as_ref()
    }

    /// Sort direction of the source request
    pub fn direction(&self) -> Option<SortDirection> {
        self.source_request.as_ref().and_then(PaginationRequest::direction)
    }

    /// Whether the chunk holds any element
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Whether the chunk was requested without a resume point
    pub fn is_first(&self) -> bool {
        self.source_request
            .as_ref()
            .map_or(true, PaginationRequest::is_initial)
    }

    /// Whether the source is exhausted after this chunk
    ///
    /// A page shorter than the requested size signals exhaustion. Without a
    /// page size there is no way to tell, so this is always `false`.
    pub fn is_last(&self) -> bool {
        match self.source_request.as_ref().and_then(PaginationRequest::max_page_size) {
            Some(max_page_size) => self.content.len() < max_page_size.get() as usize,
            None => false,
        }
    }

    /// Whether a `Next` request can follow this chunk
    ///
    /// A backward walk always reports `true`: exhaustion is only observable
    /// when walking forward.
    pub fn has_next(&self) -> bool {
        if self.is_forward_walk() {
            !self.is_last()
        } else {
            true
        }
    }

    /// Whether a `Prev` request can follow this chunk
    pub fn has_prev(&self) -> bool {
        if self.is_forward_walk() {
            !self.is_first()
        } else {
            self.has_content()
        }
    }

    /// Request for the chunk after this one, or `None` at the end of a forward walk
    pub fn next_request(&self) -> Option<PaginationRequest> {
        self.has_next().then(|| self.derive_request(PaginationRelation::Next))
    }

    /// Request for the chunk before this one, or `None` at the start
    ///
    /// The request carries this chunk's token. An empty chunk has no token,
    /// so stepping back from an empty chunk at the end of a forward walk
    /// yields a token-less `Prev` request, which sources serve from the
    /// start. Step back from the last chunk with content instead.
    pub fn prev_request(&self) -> Option<PaginationRequest> {
        self.has_prev().then(|| self.derive_request(PaginationRelation::Prev))
    }

    /// Transform every element, keeping token and source request
    pub fn map<S, F>(self, f: F) -> Chunk<S>
    where
        F: FnMut(T) -> S,
    {
        Chunk {
            content: self.content.into_iter().map(f).collect(),
            token: self.token,
            source_request: self.source_request,
        }
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    fn is_forward_walk(&self) -> bool {
        self.source_request
            .as_ref()
            .map_or(true, PaginationRequest::is_forward)
    }

    fn derive_request(&self, relation: PaginationRelation) -> PaginationRequest {
        let source = self.source_request.as_ref();
        PaginationRequest::new(
            self.token.clone(),
            Some(relation),
            source.and_then(PaginationRequest::max_page_size),
            source.and_then(PaginationRequest::direction),
        )
    }
}

impl<T> Deref for Chunk<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.content
    }
}

impl<T> AsRef<[T]> for Chunk<T> {
    fn as_ref(&self) -> &[T] {
        &self.content
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

impl<T: PartialEq> PartialEq for Chunk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.token == other.token
    }
}

impl<T: Eq> Eq for Chunk<T> {}

impl<T: Hash> Hash for Chunk<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
        self.token.hash(state);
    }
}

impl<T> fmt::Display for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content_type = if self.content.is_empty() {
            "UNKNOWN"
        } else {
            std::any::type_name::<T>()
        };
        write!(f, "Chunk containing {content_type} instances")
    }
}
