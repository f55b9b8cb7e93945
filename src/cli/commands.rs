//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mongoscope - schema inference for document collections
#[derive(Parser, Debug)]
#[command(name = "mongoscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection URI (overrides profile and environment)
    #[arg(short, long, global = true)]
    pub uri: Option<String>,

    /// Database name (overrides the database in the URI path)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Profile file (YAML)
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer a collection's schema from a bounded sample
    Infer {
        /// Collection to infer
        collection: String,

        /// Maximum number of documents to sample
        #[arg(long)]
        sample_size: Option<u32>,

        /// Infer offline from a JSON fixture file instead of a live source
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List collection names in the database (lightweight discovery)
    Collections,

    /// Count all documents in a collection
    Count {
        /// Collection to count
        collection: String,
    },

    /// List a collection's index descriptors
    Indexes {
        /// Collection to inspect
        collection: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable field tree
    Pretty,
    /// YAML
    Yaml,
}
