//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the run configuration and maps
//! check outcomes to process exit codes.

use crate::cli::Args;
use listing_validator_core::ListingReport;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The listing file does not exist.
    #[error("listing file not found: '{0}'")]
    ListingNotFound(PathBuf),

    /// The listing file could not be read.
    #[error("failed to read listing file '{path}': {source}")]
    ReadListing {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Validation failed (checks found issues).
    ValidationFailed = 1,
    /// Application startup failed (missing or unreadable listing file).
    StartupFailure = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the listing file.
    pub listing_path: PathBuf,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if !args.path.is_file() {
            return Err(ConfigError::ListingNotFound(args.path.clone()));
        }

        Ok(Self {
            listing_path: args.path.clone(),
            json_output: args.json,
        })
    }

    /// Reads the listing file.
    pub fn read_listing(&self) -> Result<String, ConfigError> {
        read_listing(&self.listing_path)
    }

    /// Determines the exit code for a finished check.
    pub fn exit_code_for_report(&self, report: &ListingReport) -> ExitCode {
        if report.is_ok() {
            ExitCode::Success
        } else {
            ExitCode::ValidationFailed
        }
    }
}

/// Reads a listing file as UTF-8 text.
pub fn read_listing(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadListing {
        path: path.to_path_buf(),
        source,
    })
}
