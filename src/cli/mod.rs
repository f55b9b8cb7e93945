//! CLI module
//!
//! Command-line interface for schema inference.
//!
//! # Commands
//!
//! - `infer` - Infer a collection's schema (live source or JSON fixture)
//! - `collections` - List collection names in the database
//! - `count` - Count all documents in a collection
//! - `indexes` - List a collection's index descriptors

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
