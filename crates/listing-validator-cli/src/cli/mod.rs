//! CLI module for the listing validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use listing_validator_core::DEFAULT_LISTING_PATH;
use std::path::PathBuf;

/// Listing file validator - checks the tables of a markdown community listing.
///
/// Verifies that every row of the libraries, software and non-believers
/// tables is well formed and that each table is sorted by name.
#[derive(Parser, Debug)]
#[command(name = "listing-validator")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the listing file.
    #[arg(long, env = "LISTING_PATH", default_value = DEFAULT_LISTING_PATH)]
    pub path: PathBuf,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
