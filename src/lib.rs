//! jsendpoints - extract API endpoints and URL paths from remote JavaScript files
//!
//! Scripts are fetched over HTTP, scanned with a user supplied set of regular
//! expressions, filtered down to plausible endpoints and reported to the
//! console and an optional append-only file.

pub mod config;
pub mod core;
pub mod extraction;
pub mod patterns;
pub mod reporting;
pub mod runner;
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{CliConfig, Config};
pub use crate::core::{EndpointSet, ExtractionReport, JsEndpointsError, Result, RunMode, RunSummary};
pub use extraction::{Extractor, FetchContent, HttpFetcher, is_valid};
pub use patterns::PatternSet;
pub use runner::Runner;
