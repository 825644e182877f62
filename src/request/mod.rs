//! Pagination request module
//!
//! A [`PaginationRequest`] says where to resume and in which direction.
//! Callers build the first one; every later one is derived by a
//! [`Chunk`](crate::chunk::Chunk).

mod types;

pub use types::PaginationRequest;

#[cfg(test)]
mod tests;
