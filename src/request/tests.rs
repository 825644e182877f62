//! Tests for request module

use super::*;
use crate::types::{PaginationRelation, SortDirection};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::num::NonZeroU32;
use test_case::test_case;

fn size(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

// ============================================================================
// Constructor Tests
// ============================================================================

#[test]
fn test_default_request_is_all_absent() {
    let request = PaginationRequest::default();
    assert_eq!(request.token(), None);
    assert_eq!(request.relation(), None);
    assert_eq!(request.max_page_size(), None);
    assert_eq!(request.direction(), None);
    assert!(request.is_initial());
    assert!(request.is_forward());
}

#[test]
fn test_new_keeps_all_fields() {
    let request = PaginationRequest::new(
        Some("abc".to_string()),
        Some(PaginationRelation::Prev),
        Some(size(50)),
        Some(SortDirection::Desc),
    );

    assert_eq!(request.token(), Some("abc"));
    assert_eq!(request.relation(), Some(PaginationRelation::Prev));
    assert_eq!(request.max_page_size(), Some(size(50)));
    assert_eq!(request.direction(), Some(SortDirection::Desc));
}

#[test]
fn test_convenience_constructors() {
    assert_eq!(
        PaginationRequest::with_token("t"),
        PaginationRequest::new(
            Some("t".to_string()),
            Some(PaginationRelation::Next),
            None,
            Some(SortDirection::Asc)
        )
    );
    assert_eq!(
        PaginationRequest::with_page_size(size(20)),
        PaginationRequest::new(None, None, Some(size(20)), Some(SortDirection::Asc))
    );
    assert_eq!(
        PaginationRequest::with_token_and_page_size("t", size(20)),
        PaginationRequest::new(
            Some("t".to_string()),
            Some(PaginationRelation::Next),
            Some(size(20)),
            Some(SortDirection::Asc)
        )
    );
    assert_eq!(
        PaginationRequest::with_direction(SortDirection::Desc),
        PaginationRequest::new(None, None, None, Some(SortDirection::Desc))
    );
    assert_eq!(
        PaginationRequest::with_token_and_direction("t", SortDirection::Desc),
        PaginationRequest::new(
            Some("t".to_string()),
            Some(PaginationRelation::Next),
            None,
            Some(SortDirection::Desc)
        )
    );
    assert_eq!(
        PaginationRequest::with_page_size_and_direction(size(5), SortDirection::Desc),
        PaginationRequest::new(None, None, Some(size(5)), Some(SortDirection::Desc))
    );
}

// ============================================================================
// Predicate Tests
// ============================================================================

#[test_case(None, true ; "absent relation walks forward")]
#[test_case(Some(PaginationRelation::Next), true ; "next walks forward")]
#[test_case(Some(PaginationRelation::Prev), false ; "prev walks backward")]
fn test_is_forward(relation: Option<PaginationRelation>, expected: bool) {
    let request = PaginationRequest::new(Some("t".to_string()), relation, None, None);
    assert_eq!(request.is_forward(), expected);
}

#[test]
fn test_absent_relation_differs_from_next() {
    let implicit = PaginationRequest::new(None, None, Some(size(10)), None);
    let explicit = PaginationRequest::new(
        None,
        Some(PaginationRelation::Next),
        Some(size(10)),
        None,
    );
    assert_ne!(implicit, explicit);
    assert_eq!(implicit.is_forward(), explicit.is_forward());
}

#[test]
fn test_limit() {
    assert_eq!(PaginationRequest::with_page_size(size(20)).limit(), 20);
    assert_eq!(PaginationRequest::default().limit(), usize::MAX);
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_serialize_skips_absent_fields() {
    let request = PaginationRequest::with_token_and_page_size("abc", size(20));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "pagination_token": "abc",
            "pagination_relation": "NEXT",
            "max_page_size": 20,
            "direction": "ASC"
        })
    );

    assert_eq!(
        serde_json::to_value(PaginationRequest::default()).unwrap(),
        json!({})
    );
}

#[test]
fn test_deserialize_partial_request() {
    let request: PaginationRequest =
        serde_json::from_value(json!({"max_page_size": 10, "direction": "DESC"})).unwrap();

    assert_eq!(
        request,
        PaginationRequest::with_page_size_and_direction(size(10), SortDirection::Desc)
    );
}

#[test]
fn test_deserialize_rejects_zero_page_size() {
    let result = serde_json::from_value::<PaginationRequest>(json!({"max_page_size": 0}));
    assert!(result.is_err());
}
