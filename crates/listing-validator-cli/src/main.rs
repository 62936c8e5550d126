//! Listing Validator CLI
//!
//! A command-line tool for validating markdown community listing files.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, JsonOutput};
use listing_validator_core::{SystemDiff, check_listing};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(&args);
    StdExitCode::from(u8::from(exit_code))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the validator with the given arguments.
fn run(args: &Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let use_colors = !args.json && io::stdout().is_terminal();

    let config = match ValidatedConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Listing file: {}", config.listing_path.display());

    let content = match config.read_listing() {
        Ok(content) => content,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, use_colors).write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let report = check_listing(&content, &SystemDiff::new());

    let written = if config.json_output {
        JsonOutput::from_report(&report).write(&mut stdout)
    } else {
        HumanOutput::new(&mut stdout, use_colors).write_report(&report)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    if report.is_ok() {
        info!("Listing is valid");
    }

    config.exit_code_for_report(&report)
}
