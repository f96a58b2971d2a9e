/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values used across the application,
/// making them easier to maintain and modify.
/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status accepted as a successful fetch
    pub const OK: u16 = 200;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// HTTP 500 Internal Server Error - server error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds for a single script fetch
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 7;
    /// Maximum accepted request timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum request timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Pattern source looked up relative to the working directory
    pub const PATTERN_FILE: &str = "regex.tmp";
    /// Browser identity sent with every fetch to avoid trivial bot blocking
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.0";
    /// Config file name searched in the working directory and its parents
    pub const CONFIG_FILE: &str = ".jsendpoints.toml";
    /// Number of parent directories searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Upper bound accepted for `--concurrency`
    pub const MAX_CONCURRENCY: usize = 10_000;
}

/// Validity filter constants
pub mod filter {
    /// Low-information literals rejected on exact match
    pub const DENYLIST: [&str; 6] = ["\"/$\"", "\"/*\"", "\"?\"", "\"/\"", "\"//\"", "`/`"];
    /// Rejected wherever it appears in a candidate
    pub const STRICT_EQUALITY_MARKER: &str = "===";
    /// Any candidate containing one of these characters is treated as code, not a path
    pub const FORBIDDEN_CHARS: [char; 17] = [
        ':', ';', '{', '}', ',', '(', ')', '|', '[', ']', '!', '<', '>', '^', '*', '+', ' ',
    ];
}

/// User facing message constants
pub mod messages {
    /// Printed when neither or both of `-l` and `-u` are given
    pub const USAGE: &str =
        "Please use one of -u for single js file URL or -l for .txt file contains js files URLs.";
    /// Prefix for pattern loading diagnostics
    pub const PATTERN_LOAD_FAILED: &str = "[ ! ] Failed to read regex patterns : ";
    /// Prefix for URL list loading diagnostics
    pub const URL_LIST_OPEN_FAILED: &str = "Error opening file:";
    /// Prefix for output file diagnostics
    pub const OUTPUT_WRITE_FAILED: &str = "Error writing to file:";
}
