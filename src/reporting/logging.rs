use crate::config::Config;
use crate::core::error::FetchError;
use crate::core::types::{RunMode, RunSummary};
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, silent: bool) {
    let level = if silent {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let concurrency = config
        .concurrency
        .map_or_else(|| "unbounded".to_string(), |c| c.to_string());
    let deadline = config
        .deadline
        .map_or_else(|| "none".to_string(), |d| format!("{d}s"));

    info!(
        "Configuration: patterns={}, timeout={}s, concurrency={concurrency}, deadline={deadline}",
        config.pattern_file().display(),
        config.timeout_duration().as_secs()
    );
    info!(
        "Output: file={}, silent={}",
        config.output_file.as_deref().unwrap_or("none"),
        config.silent()
    );
    debug!("User-Agent: {}", config.user_agent());
}

/// Log the selected run mode
pub fn log_run_start(mode: &RunMode) {
    info!("Starting {mode} run");
}

/// Log the number of URLs read from a batch list
pub fn log_batch_loaded(path: &str, url_count: usize) {
    info!("Loaded {url_count} URL(s) from {path}");
}

/// Log a skipped URL; fetch failures never reach the console report
pub fn log_fetch_skipped(url: &str, err: &FetchError) {
    debug!("✗ {url} -> {err}");
}

/// Log a finished scan
pub fn log_extraction(url: &str, raw_matches: usize, endpoints: usize) {
    debug!("✓ {url} -> {raw_matches} match(es), {endpoints} endpoint(s)");
}

/// Log run completion
pub fn log_run_complete(summary: &RunSummary, duration_ms: u128) {
    if summary.cancelled == 0 {
        info!(
            "Run complete: {}/{} URL(s) reported ({}ms)",
            summary.reported, summary.dispatched, duration_ms
        );
    } else {
        warn!(
            "Run complete: {}/{} URL(s) reported, {} cancelled by deadline ({}ms)",
            summary.reported, summary.dispatched, summary.cancelled, duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization_is_idempotent() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info_defaults_and_overrides() {
        log_config_info(&Config::default());

        let config = Config {
            concurrency: Some(4),
            deadline: Some(30),
            output_file: Some("out.txt".to_string()),
            silent: Some(true),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_run_helpers() {
        log_run_start(&RunMode::Single("https://example.com/app.js".to_string()));
        log_run_start(&RunMode::Batch("urls.txt".to_string()));
        log_batch_loaded("urls.txt", 3);
        log_fetch_skipped("https://example.com/x.js", &FetchError::Status(404));
        log_extraction("https://example.com/app.js", 5, 2);
    }

    #[test]
    fn test_log_run_complete_variants() {
        log_run_complete(
            &RunSummary {
                dispatched: 2,
                reported: 2,
                cancelled: 0,
            },
            10,
        );
        log_run_complete(
            &RunSummary {
                dispatched: 3,
                reported: 1,
                cancelled: 2,
            },
            7000,
        );
    }

    #[test]
    fn test_log_error_and_warning() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("With source", Some(&io_error));
        log_error("Without source", None);
        log_warning("Something odd");
    }
}
