//! CLI commands and argument parsing

use crate::types::SortDirection;
use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Solidafy Chunks pagination token CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-chunks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paging configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a pair of boundary keys into a pagination token
    ///
    /// Keys are parsed as JSON; anything that is not valid JSON is taken as
    /// a plain string.
    Encode {
        /// Key of the first element
        #[arg(long)]
        first: String,

        /// Key of the last element
        #[arg(long)]
        last: String,
    },

    /// Decode a pagination token into its boundary keys
    Decode {
        /// Token to decode
        token: String,
    },

    /// Walk a generated in-memory source chunk by chunk
    Walk {
        /// Number of items in the source
        #[arg(long, default_value = "50")]
        items: u32,

        /// Page size (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<NonZeroU32>,

        /// Sort direction (defaults to the configured direction)
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,

        /// Walk back to the first chunk after reaching the last one
        #[arg(long)]
        and_back: bool,
    },
}

/// Sort direction argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}
