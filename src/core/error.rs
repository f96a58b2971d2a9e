use std::fmt;

/// Why a script could not be fetched.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with something other than 200 OK
    Status(u16),

    /// DNS, connect, TLS, timeout or body read failure
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "non-200 status code: {code}"),
            FetchError::Transport(err) => write!(f, "transport failure: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Status(_) => None,
            FetchError::Transport(err) => Some(err),
        }
    }
}

/// Error types for jsendpoints operations
#[derive(Debug)]
pub enum JsEndpointsError {
    /// IO error (pattern source, URL list, output file)
    Io(std::io::Error),

    /// A line of the pattern source is not a valid regular expression
    PatternSyntax {
        line_number: usize,
        pattern: String,
        source: regex::Error,
    },

    /// Fetching a script failed
    Fetch(FetchError),

    /// Invalid combination of command line flags
    Usage(String),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// HTTP client could not be constructed
    Http(reqwest::Error),
}

impl fmt::Display for JsEndpointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsEndpointsError::Io(err) => write!(f, "IO error: {err}"),
            JsEndpointsError::PatternSyntax {
                line_number,
                pattern,
                source,
            } => write!(
                f,
                "Pattern syntax error on line {line_number} ({pattern}): {source}"
            ),
            JsEndpointsError::Fetch(err) => write!(f, "Fetch error: {err}"),
            JsEndpointsError::Usage(msg) => write!(f, "Usage error: {msg}"),
            JsEndpointsError::Config(msg) => write!(f, "Configuration error: {msg}"),
            JsEndpointsError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            JsEndpointsError::Http(err) => write!(f, "HTTP error: {err}"),
        }
    }
}

impl std::error::Error for JsEndpointsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsEndpointsError::Io(err) => Some(err),
            JsEndpointsError::PatternSyntax { source, .. } => Some(source),
            JsEndpointsError::Fetch(err) => Some(err),
            JsEndpointsError::TomlParsing(err) => Some(err),
            JsEndpointsError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JsEndpointsError {
    fn from(err: std::io::Error) -> Self {
        JsEndpointsError::Io(err)
    }
}

impl From<FetchError> for JsEndpointsError {
    fn from(err: FetchError) -> Self {
        JsEndpointsError::Fetch(err)
    }
}

impl From<toml::de::Error> for JsEndpointsError {
    fn from(err: toml::de::Error) -> Self {
        JsEndpointsError::TomlParsing(err)
    }
}

impl From<reqwest::Error> for JsEndpointsError {
    fn from(err: reqwest::Error) -> Self {
        JsEndpointsError::Http(err)
    }
}

/// Type alias for Results using JsEndpointsError
pub type Result<T> = std::result::Result<T, JsEndpointsError>;
