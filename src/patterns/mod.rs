//! Pattern source loading
//!
//! This module reads the line-delimited file of regular expressions
//! used to scan fetched scripts.

pub mod loader;

// Re-export commonly used items
pub use loader::PatternSet;
