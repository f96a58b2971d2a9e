//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, timeouts};
use crate::core::error::{JsEndpointsError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File holding one regular expression per line
    pub pattern_file: Option<String>,

    /// Timeout in seconds for each script fetch
    pub timeout: Option<u64>,

    /// User-Agent header sent with every fetch
    pub user_agent: Option<String>,

    /// Maximum number of scripts fetched at once (unbounded when unset)
    pub concurrency: Option<usize>,

    /// Overall batch deadline in seconds; unfinished extractions are cancelled
    pub deadline: Option<u64>,

    /// Append-only file receiving every report
    pub output_file: Option<String>,

    /// Suppress console reports
    pub silent: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            JsEndpointsError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            JsEndpointsError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut candidate = dir.to_path_buf();
        for _ in 0..=defaults::CONFIG_SEARCH_DEPTH {
            if let Ok(config) = Self::load_from_file(candidate.join(defaults::CONFIG_FILE)) {
                return config;
            }
            candidate = candidate.join("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref pattern_file) = cli_config.pattern_file {
            self.pattern_file = Some(pattern_file.clone());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(deadline) = cli_config.deadline {
            self.deadline = Some(deadline);
        }
        if let Some(ref output_file) = cli_config.output_file {
            self.output_file = Some(output_file.clone());
        }
        if cli_config.silent {
            self.silent = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Pattern source path, `regex.tmp` by default
    pub fn pattern_file(&self) -> PathBuf {
        PathBuf::from(
            self.pattern_file
                .as_deref()
                .unwrap_or(defaults::PATTERN_FILE),
        )
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(defaults::USER_AGENT)
    }

    /// Get the overall deadline as Duration, if any
    pub fn deadline_duration(&self) -> Option<Duration> {
        self.deadline.map(Duration::from_secs)
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    pub fn silent(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout
            && !(timeouts::MIN_TIMEOUT_SECONDS..=timeouts::MAX_TIMEOUT_SECONDS).contains(&timeout)
        {
            return Err(JsEndpointsError::Config(format!(
                "Timeout of {timeout} seconds is out of range. Expected {}-{} seconds.",
                timeouts::MIN_TIMEOUT_SECONDS,
                timeouts::MAX_TIMEOUT_SECONDS
            )));
        }

        if let Some(concurrency) = self.concurrency
            && !(1..=defaults::MAX_CONCURRENCY).contains(&concurrency)
        {
            return Err(JsEndpointsError::Config(format!(
                "Concurrency of {concurrency} is out of range. Expected 1-{}.",
                defaults::MAX_CONCURRENCY
            )));
        }

        if self.deadline == Some(0) {
            return Err(JsEndpointsError::Config(
                "Deadline cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }

        if let Some(ref pattern_file) = self.pattern_file
            && pattern_file.trim().is_empty()
        {
            return Err(JsEndpointsError::Config(
                "Pattern file path cannot be empty.".to_string(),
            ));
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(JsEndpointsError::Config(
                "User-Agent cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Input
    pub list: Option<String>, // -l
    pub url: Option<String>,  // -u

    // Output
    pub output_file: Option<String>, // -o
    pub silent: bool,                // -s
    pub verbose: bool,               // --verbose

    // Scanning & network
    pub pattern_file: Option<String>, // --patterns
    pub timeout: Option<u64>,         // --timeout
    pub user_agent: Option<String>,   // --user-agent
    pub concurrency: Option<usize>,   // --concurrency
    pub deadline: Option<u64>,        // --deadline

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
