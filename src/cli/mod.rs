//! CLI module
//!
//! Command-line tooling for pagination tokens.
//!
//! # Commands
//!
//! - `encode` - Build a token from a pair of boundary keys
//! - `decode` - Show the boundary keys inside a token
//! - `walk` - Page through a generated in-memory source

mod commands;
mod runner;

pub use commands::{Cli, Commands, DirectionArg};
pub use runner::Runner;
