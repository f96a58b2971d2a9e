// Command-line interface definitions and parsing for jsendpoints

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Input
    /// .txt file containing JavaScript file URLs, one per line
    #[arg(short = 'l', long, value_name = "FILE", help_heading = "Input")]
    pub list: Option<String>,

    /// Single JavaScript file URL
    #[arg(short = 'u', long, value_name = "URL", help_heading = "Input")]
    pub url: Option<String>,

    // Output
    /// Append extracted endpoints to this file
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Output")]
    pub output: Option<String>,

    /// Do not print reports to the console
    #[arg(short = 's', long, help_heading = "Output")]
    pub silent: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output")]
    pub verbose: bool,

    // Scanning & Network
    /// File with one regular expression per line (default: regex.tmp)
    #[arg(short = 'p', long, value_name = "FILE", help_heading = "Scanning & Network")]
    pub patterns: Option<String>,

    /// Fetch timeout in seconds (default: 7)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Scanning & Network"
    )]
    pub timeout: Option<u64>,

    /// Custom User-Agent header (default: Firefox on macOS)
    #[arg(long, value_name = "AGENT", help_heading = "Scanning & Network")]
    pub user_agent: Option<String>,

    /// Maximum concurrent fetches in batch mode (default: unbounded)
    #[arg(long, value_name = "COUNT", help_heading = "Scanning & Network")]
    pub concurrency: Option<usize>,

    /// Cancel unfinished batch extractions after this many seconds
    #[arg(long, value_name = "SECONDS", help_heading = "Scanning & Network")]
    pub deadline: Option<u64>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        list: cli.list.clone(),
        url: cli.url.clone(),
        output_file: cli.output.clone(),
        silent: cli.silent,
        verbose: cli.verbose,
        pattern_file: cli.patterns.clone(),
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        concurrency: cli.concurrency,
        deadline: cli.deadline,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
