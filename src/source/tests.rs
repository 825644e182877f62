//! Tests for source module

use super::*;
use crate::token::{JsonTokenCodec, TokenCodecExt};
use crate::types::{PaginationRelation, SortDirection};
use pretty_assertions::assert_eq;
use std::num::NonZeroU32;

fn size(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

fn source() -> MemorySource<u32, u32> {
    // Deliberately unsorted: the source orders by key
    let items = vec![5, 1, 9, 3, 7, 2, 8, 4, 6, 10];
    MemorySource::new(items, |n| *n, JsonTokenCodec::new())
}

fn token(first: u32, last: u32) -> String {
    JsonTokenCodec::new().encode(&first, &last).unwrap()
}

fn request(
    token: Option<String>,
    relation: Option<PaginationRelation>,
    page_size: Option<u32>,
    direction: Option<SortDirection>,
) -> PaginationRequest {
    PaginationRequest::new(token, relation, page_size.map(size), direction)
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_memory_source_sorts_items() {
    let source = source();
    assert_eq!(source.items(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(source.len(), 10);
    assert!(!source.is_empty());
}

// ============================================================================
// Initial Fetch Tests
// ============================================================================

#[test]
fn test_fetch_first_page_ascending() {
    let page = source()
        .fetch(&PaginationRequest::with_page_size(size(3)))
        .unwrap();
    assert_eq!(page, vec![1, 2, 3]);
}

#[test]
fn test_fetch_first_page_descending() {
    let page = source()
        .fetch(&PaginationRequest::with_page_size_and_direction(
            size(3),
            SortDirection::Desc,
        ))
        .unwrap();
    assert_eq!(page, vec![10, 9, 8]);
}

#[test]
fn test_fetch_unbounded_defaults_to_ascending() {
    let page = source().fetch(&PaginationRequest::default()).unwrap();
    assert_eq!(page, (1..=10).collect::<Vec<_>>());
}

// ============================================================================
// Resume Tests
// ============================================================================

#[test]
fn test_fetch_next_resumes_after_last_key() {
    let page = source()
        .fetch(&PaginationRequest::with_token_and_page_size(
            token(1, 3),
            size(3),
        ))
        .unwrap();
    assert_eq!(page, vec![4, 5, 6]);
}

#[test]
fn test_fetch_next_descending() {
    let page = source()
        .fetch(&request(
            Some(token(10, 8)),
            Some(PaginationRelation::Next),
            Some(3),
            Some(SortDirection::Desc),
        ))
        .unwrap();
    assert_eq!(page, vec![7, 6, 5]);
}

#[test]
fn test_fetch_absent_relation_resumes_forward() {
    let page = source()
        .fetch(&request(Some(token(4, 6)), None, Some(2), None))
        .unwrap();
    assert_eq!(page, vec![7, 8]);
}

#[test]
fn test_fetch_prev_returns_nearest_elements_before_first_key() {
    let page = source()
        .fetch(&request(
            Some(token(7, 9)),
            Some(PaginationRelation::Prev),
            Some(3),
            Some(SortDirection::Asc),
        ))
        .unwrap();
    assert_eq!(page, vec![4, 5, 6]);
}

#[test]
fn test_fetch_prev_descending() {
    let page = source()
        .fetch(&request(
            Some(token(4, 2)),
            Some(PaginationRelation::Prev),
            Some(3),
            Some(SortDirection::Desc),
        ))
        .unwrap();
    assert_eq!(page, vec![7, 6, 5]);
}

#[test]
fn test_fetch_prev_near_start_returns_short_page() {
    let page = source()
        .fetch(&request(
            Some(token(3, 5)),
            Some(PaginationRelation::Prev),
            Some(5),
            None,
        ))
        .unwrap();
    assert_eq!(page, vec![1, 2]);
}

#[test]
fn test_fetch_past_end_is_empty() {
    let page = source()
        .fetch(&PaginationRequest::with_token_and_page_size(
            token(8, 10),
            size(3),
        ))
        .unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_fetch_with_invalid_token_starts_over() {
    let page = source()
        .fetch(&PaginationRequest::with_token_and_page_size(
            "garbage!",
            size(2),
        ))
        .unwrap();
    assert_eq!(page, vec![1, 2]);
}

#[test]
fn test_fetch_with_wrong_key_type_starts_over() {
    let wrong = JsonTokenCodec::new().encode("a", "b").unwrap();
    let page = source()
        .fetch(&PaginationRequest::with_token_and_page_size(wrong, size(2)))
        .unwrap();
    assert_eq!(page, vec![1, 2]);
}

// ============================================================================
// Closure Source Tests
// ============================================================================

#[test]
fn test_closure_is_a_chunk_source() {
    let source = |request: &PaginationRequest| -> crate::Result<Vec<&'static str>> {
        Ok(["a", "b", "c"].into_iter().take(request.limit()).collect())
    };

    let page = ChunkSource::fetch(&source, &PaginationRequest::with_page_size(size(2))).unwrap();
    assert_eq!(page, vec!["a", "b"]);
}
