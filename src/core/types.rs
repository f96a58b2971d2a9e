use rustc_hash::FxHashSet;
use std::fmt;

/// Deduplicated endpoints found in a single script.
///
/// Uniqueness is exact string equality. Endpoints are kept in the order they
/// were first inserted so reports are stable across runs.
#[derive(Debug, Default, Clone)]
pub struct EndpointSet {
    seen: FxHashSet<String>,
    ordered: Vec<String>,
}

impl EndpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an endpoint, returning `false` if it was already present.
    pub fn insert(&mut self, endpoint: &str) -> bool {
        if self.seen.contains(endpoint) {
            return false;
        }
        self.seen.insert(endpoint.to_string());
        self.ordered.push(endpoint.to_string());
        true
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.seen.contains(endpoint)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Endpoints in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl PartialEq for EndpointSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for EndpointSet {}

impl<'a> FromIterator<&'a str> for EndpointSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for endpoint in iter {
            set.insert(endpoint);
        }
        set
    }
}

/// Result of one successful extraction, waiting for an ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub url: String,
    pub endpoints: EndpointSet,
}

impl ExtractionReport {
    pub fn new(url: impl Into<String>, endpoints: EndpointSet) -> Self {
        Self {
            url: url.into(),
            endpoints,
        }
    }

    /// Header line announcing the script, e.g. `[ 3 ] https://host/app.js`.
    pub fn header(&self, ordinal: usize) -> String {
        format!("[ {} ] {}", ordinal, self.url)
    }

    /// Header followed by one line per endpoint, without terminators.
    pub fn lines(&self, ordinal: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.endpoints.len() + 1);
        lines.push(self.header(ordinal));
        lines.extend(self.endpoints.iter().map(str::to_string));
        lines
    }
}

/// Which input the run processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Many URLs, one per line of a file
    Batch(String),
    /// One URL given directly
    Single(String),
}

impl RunMode {
    /// Exactly one of `list` and `url` must be set.
    pub fn from_flags(list: Option<&str>, url: Option<&str>) -> Option<Self> {
        let list = list.filter(|s| !s.is_empty());
        let url = url.filter(|s| !s.is_empty());
        match (list, url) {
            (Some(path), None) => Some(RunMode::Batch(path.to_string())),
            (None, Some(url)) => Some(RunMode::Single(url.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Batch(path) => write!(f, "batch ({path})"),
            RunMode::Single(url) => write!(f, "single ({url})"),
        }
    }
}

/// Counts gathered by the run coordinator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Extractions started
    pub dispatched: usize,
    /// Extractions that produced a report
    pub reported: usize,
    /// Extractions aborted by the overall deadline
    pub cancelled: usize,
}
