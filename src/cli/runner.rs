//! CLI runner - executes commands

use crate::chunk::{Chunk, ChunkFactory};
use crate::cli::commands::{Cli, Commands, DirectionArg};
use crate::config::PagingConfig;
use crate::error::Result;
use crate::request::PaginationRequest;
use crate::source::MemorySource;
use crate::token::{TokenCodec, TokenCodecExt};
use crate::types::JsonValue;
use serde_json::json;
use std::num::NonZeroU32;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Encode { first, last } => self.encode(&config, first, last),
            Commands::Decode { token } => self.decode(&config, token),
            Commands::Walk {
                items,
                page_size,
                direction,
                and_back,
            } => self.walk(&config, *items, *page_size, *direction, *and_back),
        }
    }

    /// Load paging config, falling back to defaults
    fn load_config(&self) -> Result<PagingConfig> {
        match &self.cli.config {
            Some(path) => PagingConfig::from_file(path),
            None => Ok(PagingConfig::default()),
        }
    }

    fn encode(&self, config: &PagingConfig, first: &str, last: &str) -> Result<String> {
        config.codec().encode(&parse_key(first), &parse_key(last))
    }

    fn decode(&self, config: &PagingConfig, token: &str) -> Result<String> {
        let keys = config.codec().try_decode_keys(token)?;
        Ok(serde_json::to_string(&keys)?)
    }

    fn walk(
        &self,
        config: &PagingConfig,
        items: u32,
        page_size: Option<NonZeroU32>,
        direction: Option<DirectionArg>,
        and_back: bool,
    ) -> Result<String> {
        let codec = config.codec();
        let source = MemorySource::new((1..=items).collect(), |n: &u32| *n, codec.clone());
        let factory = ChunkFactory::new(codec);
        let key = |n: &u32| *n;

        let request = config.resolve(&PaginationRequest::new(
            None,
            None,
            page_size,
            direction.map(Into::into),
        ));
        debug!(?request, items, "Starting walk");

        let mut lines = Vec::new();
        let mut chunk = factory.fetch(&source, request, key)?;
        let mut last_with_content = None;

        loop {
            lines.push(describe(&chunk)?);
            if !chunk.has_content() {
                break;
            }
            last_with_content = Some(chunk.clone());
            match chunk.next_request() {
                Some(next) => chunk = factory.fetch(&source, next, key)?,
                None => break,
            }
        }

        if and_back {
            if let Some(mut chunk) = last_with_content {
                while let Some(prev) = chunk.prev_request() {
                    chunk = factory.fetch(&source, prev, key)?;
                    lines.push(describe(&chunk)?);
                }
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Parse a key argument as JSON, falling back to a plain string
fn parse_key(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

/// One-line summary of a chunk and its navigation state
fn describe(chunk: &Chunk<u32>) -> Result<String> {
    let relation = chunk
        .source_request()
        .and_then(PaginationRequest::relation)
        .map(|relation| relation.to_string());

    Ok(serde_json::to_string(&json!({
        "relation": relation,
        "content": chunk.content(),
        "is_first": chunk.is_first(),
        "is_last": chunk.is_last(),
        "has_next": chunk.has_next(),
        "has_prev": chunk.has_prev(),
    }))?)
}
