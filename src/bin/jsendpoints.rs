use clap::Parser;
use jsendpoints::config::{CliConfig, Config};
use jsendpoints::core::constants::messages;
use jsendpoints::core::{JsEndpointsError, RunMode};
use jsendpoints::reporting::logging;
use jsendpoints::runner::Runner;
use jsendpoints::ui::{Cli, cli_to_config};

use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_jsendpoints_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main extraction logic extracted from main() for testing
pub async fn run_jsendpoints_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Exactly one of -l / -u, checked before any other work
    let Some(mode) = RunMode::from_flags(cli_config.list.as_deref(), cli_config.url.as_deref())
    else {
        println!("{}", messages::USAGE);
        return Ok(1);
    };

    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose(), config.silent());
    logging::log_config_info(&config);

    let start_time = Instant::now();
    let runner = Runner::new(config)?;

    let summary = match runner.run(&mode).await {
        Ok(summary) => summary,
        Err(JsEndpointsError::Io(e)) if matches!(mode, RunMode::Batch(_)) => {
            println!("{} {}", messages::URL_LIST_OPEN_FAILED, e);
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    let elapsed = start_time.elapsed();
    logging::log_run_complete(&summary, elapsed.as_millis());

    if summary.cancelled > 0 {
        eprintln!(
            "Warning: deadline reached, {} of {} extraction(s) cancelled",
            summary.cancelled, summary.dispatched
        );
    }

    println!("Process took {} ms", elapsed.as_millis());
    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
