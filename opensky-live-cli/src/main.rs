//! OpenSky Live CLI - Command-line host for the airspace tools
//!
//! Each subcommand runs one tool and prints its JSON envelope on stdout.
//! The exit code is 0 when the envelope is `ok` and 1 otherwise.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use opensky_live::config::Settings;
use opensky_live::logging::{init_logging, LoggingGuard};
use opensky_live::tools::AirspaceTools;
use tracing::debug;

use commands::Commands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "opensky-live")]
#[command(version = opensky_live::VERSION)]
#[command(about = "Live aircraft states from the OpenSky Network", long_about = None)]
struct Cli {
    /// Config file (default: ~/.opensky-live/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds, overriding config and environment
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => e.exit(),
    }
}

fn run(cli: Cli) -> Result<bool, CliError> {
    let _logging: LoggingGuard =
        init_logging(cli.log_file.as_deref()).map_err(CliError::LoggingInit)?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(secs) = cli.timeout {
        settings = settings.with_timeout(Duration::from_secs(secs));
    }
    debug!(
        timeout_secs = settings.timeout.as_secs(),
        top_n = settings.default_top_n,
        "Settings loaded"
    );

    let tools = AirspaceTools::from_settings(&settings)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(commands::run(&tools, cli.command))
}
