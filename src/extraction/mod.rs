//! Endpoint extraction
//!
//! This module fetches scripts over HTTP, scans them with the loaded
//! pattern set and filters the matches down to endpoint candidates.

pub mod engine;
pub mod fetcher;
pub mod filter;

// Re-export commonly used items
pub use engine::{Extractor, collect_endpoints, scan};
pub use fetcher::{FetchContent, HttpFetcher};
pub use filter::is_valid;
