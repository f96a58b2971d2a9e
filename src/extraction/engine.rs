use crate::core::constants::messages;
use crate::core::error::{JsEndpointsError, Result};
use crate::core::types::{EndpointSet, ExtractionReport};
use crate::extraction::fetcher::FetchContent;
use crate::extraction::filter::is_valid;
use crate::patterns::PatternSet;
use crate::reporting::logging;
use crate::reporting::sink::SinkHandle;

use std::path::PathBuf;
use std::sync::Arc;

/// Run every pattern over `text`, in pattern order, left to right within a pattern.
pub fn scan<'t>(text: &'t str, patterns: &PatternSet) -> Vec<&'t str> {
    patterns
        .iter()
        .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str()))
        .collect()
}

/// Filter raw matches and dedupe the survivors. Zero-length matches are dropped.
pub fn collect_endpoints<'a, I>(matches: I) -> EndpointSet
where
    I: IntoIterator<Item = &'a str>,
{
    matches
        .into_iter()
        .filter(|candidate| !candidate.is_empty() && is_valid(candidate))
        .collect()
}

/// Fetches one script, scans it and forwards the report to the output sink.
pub struct Extractor {
    fetcher: Arc<dyn FetchContent>,
    pattern_file: PathBuf,
    sink: SinkHandle,
}

impl Extractor {
    pub fn new(fetcher: Arc<dyn FetchContent>, pattern_file: PathBuf, sink: SinkHandle) -> Self {
        Self {
            fetcher,
            pattern_file,
            sink,
        }
    }

    /// Fetch and scan `url` without reporting anything.
    ///
    /// The pattern source is re-read on every call.
    pub async fn try_extract(&self, url: &str) -> Result<ExtractionReport> {
        let content = self.fetcher.fetch(url).await?;
        let patterns = PatternSet::load(&self.pattern_file)?;

        let text = String::from_utf8_lossy(&content);
        let matches = scan(&text, &patterns);
        let endpoints = collect_endpoints(matches.iter().copied());
        logging::log_extraction(url, matches.len(), endpoints.len());

        Ok(ExtractionReport::new(url, endpoints))
    }

    /// Extract `url` and hand the result to the sink.
    ///
    /// Returns `true` when a report was submitted. Fetch failures are skipped
    /// without a diagnostic; pattern source failures print one.
    pub async fn extract(&self, url: &str) -> bool {
        match self.try_extract(url).await {
            Ok(report) => self.sink.submit(report),
            Err(JsEndpointsError::Fetch(err)) => {
                logging::log_fetch_skipped(url, &err);
                false
            }
            Err(err) => {
                println!("{}{}", messages::PATTERN_LOAD_FAILED, err);
                logging::log_error(&format!("Skipping {url}"), Some(&err));
                false
            }
        }
    }
}
