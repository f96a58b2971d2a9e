//! User interface
//!
//! This module contains command line parsing and its conversion into
//! configuration values.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
