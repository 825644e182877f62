//! Chunk module
//!
//! A [`Chunk`] is one page of results. It knows whether it is the first or
//! last page of a walk and derives the request for the page after or before
//! it:
//!
//! ```text
//!   request ──► ChunkSource::fetch ──► ChunkFactory::create ──► Chunk
//!      ▲                                                         │
//!      └──────────── next_request() / prev_request() ◄───────────┘
//! ```

mod factory;
mod types;

pub use factory::ChunkFactory;
pub use types::Chunk;
