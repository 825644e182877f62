//! Pagination request types

use crate::types::{PaginationRelation, SortDirection};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Immutable descriptor of the chunk to fetch
///
/// Every field may be absent:
/// - no token: start from the beginning in the requested direction
/// - no relation: walk forward, but distinguishable from an explicit `Next`
/// - no page size: unbounded
/// - no direction: the source's default ordering
///
/// Convenience constructors fill `relation = Next` when a token is given and
/// `direction = Asc` when none is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(
        default,
        rename = "pagination_token",
        skip_serializing_if = "Option::is_none"
    )]
    token: Option<String>,

    #[serde(
        default,
        rename = "pagination_relation",
        skip_serializing_if = "Option::is_none"
    )]
    relation: Option<PaginationRelation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_page_size: Option<NonZeroU32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<SortDirection>,
}

impl PaginationRequest {
    /// Create a request from all four fields
    pub fn new(
        token: Option<String>,
        relation: Option<PaginationRelation>,
        max_page_size: Option<NonZeroU32>,
        direction: Option<SortDirection>,
    ) -> Self {
        Self {
            token,
            relation,
            max_page_size,
            direction,
        }
    }

    /// Resume forward from a token, ascending, unbounded
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(
            Some(token.into()),
            Some(PaginationRelation::Next),
            None,
            Some(SortDirection::Asc),
        )
    }

    /// First chunk of at most `max_page_size` elements, ascending
    pub fn with_page_size(max_page_size: NonZeroU32) -> Self {
        Self::new(None, None, Some(max_page_size), Some(SortDirection::Asc))
    }

    /// Resume forward from a token with a page size, ascending
    pub fn with_token_and_page_size(token: impl Into<String>, max_page_size: NonZeroU32) -> Self {
        Self::new(
            Some(token.into()),
            Some(PaginationRelation::Next),
            Some(max_page_size),
            Some(SortDirection::Asc),
        )
    }

    /// First chunk in the given direction, unbounded
    pub fn with_direction(direction: SortDirection) -> Self {
        Self::new(None, None, None, Some(direction))
    }

    /// Resume forward from a token in the given direction
    pub fn with_token_and_direction(token: impl Into<String>, direction: SortDirection) -> Self {
        Self::new(
            Some(token.into()),
            Some(PaginationRelation::Next),
            None,
            Some(direction),
        )
    }

    /// First chunk with a page size in the given direction
    pub fn with_page_size_and_direction(
        max_page_size: NonZeroU32,
        direction: SortDirection,
    ) -> Self {
        Self::new(None, None, Some(max_page_size), Some(direction))
    }

    /// Resume token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Requested relation to the token, if any
    pub fn relation(&self) -> Option<PaginationRelation> {
        self.relation
    }

    /// Maximum number of elements to fetch, if bounded
    pub fn max_page_size(&self) -> Option<NonZeroU32> {
        self.max_page_size
    }

    /// Sort direction of the source, if specified
    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Whether this request walks forward (relation absent or `Next`)
    pub fn is_forward(&self) -> bool {
        !self.relation.is_some_and(|relation| relation.is_prev())
    }

    /// Whether this request starts without a resume point
    pub fn is_initial(&self) -> bool {
        self.token.is_none()
    }

    /// Page size as a `usize` limit (`usize::MAX` when unbounded)
    pub fn limit(&self) -> usize {
        self.max_page_size.map_or(usize::MAX, |size| size.get() as usize)
    }
}
