//! Common types used throughout Solidafy Chunks
//!
//! This module contains shared type definitions and type aliases
//! used across the request, chunk and source modules.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort direction of the underlying ordered source
///
/// Independent of the pagination relation: a `Desc` source can be walked
/// forward (towards smaller keys) or backward (towards larger keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order (smallest key first)
    #[default]
    Asc,
    /// Descending order (largest key first)
    Desc,
}

impl SortDirection {
    /// Check if this is ascending order
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Check if this is descending order
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }

    /// The opposite direction
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Compare two keys as they are ordered in this direction
    pub fn compare<K: Ord + ?Sized>(&self, a: &K, b: &K) -> Ordering {
        match self {
            Self::Asc => a.cmp(b),
            Self::Desc => b.cmp(a),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

// ============================================================================
// Pagination Relation
// ============================================================================

/// Movement requested relative to a pagination token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaginationRelation {
    /// Elements strictly after the token's last key
    Next,
    /// Elements strictly before the token's first key
    Prev,
}

impl PaginationRelation {
    /// Check if this is a forward movement
    pub fn is_next(&self) -> bool {
        matches!(self, Self::Next)
    }

    /// Check if this is a backward movement
    pub fn is_prev(&self) -> bool {
        matches!(self, Self::Prev)
    }
}

impl fmt::Display for PaginationRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("NEXT"),
            Self::Prev => f.write_str("PREV"),
        }
    }
}
