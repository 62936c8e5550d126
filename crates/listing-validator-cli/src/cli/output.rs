//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! listing check results.

use colored::Colorize;
use listing_validator_core::{ListingReport, ParseError, Section, ValidationError};
use serde::Serialize;
use std::io::Write;

/// JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Whether every check passed.
    pub valid: bool,
    /// Row format, whitespace, punctuation and trailer violations.
    pub format: Vec<JsonIssue>,
    /// Section ordering violations.
    pub ordering: Vec<JsonIssue>,
}

impl JsonOutput {
    /// Builds the JSON output for a report.
    pub fn from_report(report: &ListingReport) -> Self {
        Self {
            valid: report.is_ok(),
            format: report.parse.errors.iter().map(JsonIssue::from).collect(),
            ordering: report.ordering.errors.iter().map(JsonIssue::from).collect(),
        }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// Line number where the issue occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The section the issue belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    /// Human-readable message.
    pub message: String,
    /// The offending line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Unified diff for unsorted sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl From<&ParseError> for JsonIssue {
    fn from(error: &ParseError) -> Self {
        let section = match error {
            ParseError::ColumnFormat { section, .. } => Some(*section),
            _ => None,
        };
        Self {
            line: Some(error.line()),
            section,
            message: error.to_string(),
            text: Some(error.text().to_string()),
            diff: None,
        }
    }
}

impl From<&ValidationError> for JsonIssue {
    fn from(error: &ValidationError) -> Self {
        let text = match error {
            ValidationError::MissingSortKey { text, .. } => Some(text.clone()),
            ValidationError::Unsorted { .. } => None,
        };
        Self {
            line: error.line(),
            section: Some(error.section()),
            message: error.to_string(),
            text,
            diff: error.diff().map(str::to_string),
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a group of issues.
    pub fn write_group_header(&mut self, name: &str) -> std::io::Result<()> {
        let header = format!("==> {}", name);
        if self.use_colors {
            writeln!(self.writer, "{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }
        Ok(())
    }

    /// Writes a single issue line.
    pub fn write_issue(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "  {} {}", "[ERROR]".red().bold(), message)?;
        } else {
            writeln!(self.writer, "  [ERROR] {}", message)?;
        }
        Ok(())
    }

    /// Writes a unified diff block, indented under its issue.
    pub fn write_diff(&mut self, diff: &str) -> std::io::Result<()> {
        for line in diff.lines() {
            if !self.use_colors {
                writeln!(self.writer, "    {}", line)?;
            } else if line.starts_with("+++") || line.starts_with("---") {
                writeln!(self.writer, "    {}", line.bold())?;
            } else if line.starts_with('+') {
                writeln!(self.writer, "    {}", line.green())?;
            } else if line.starts_with('-') {
                writeln!(self.writer, "    {}", line.red())?;
            } else if line.starts_with("@@") {
                writeln!(self.writer, "    {}", line.cyan())?;
            } else {
                writeln!(self.writer, "    {}", line)?;
            }
        }
        Ok(())
    }

    /// Writes every issue of a report.
    ///
    /// A report without issues writes nothing.
    pub fn write_report(&mut self, report: &ListingReport) -> std::io::Result<()> {
        if report.is_ok() {
            return Ok(());
        }

        if report.parse.has_errors() {
            self.write_group_header("format")?;
            for error in &report.parse.errors {
                self.write_issue(&error.to_string())?;
            }
        }

        if report.ordering.has_errors() {
            self.write_group_header("ordering")?;
            for error in &report.ordering.errors {
                self.write_issue(&error.to_string())?;
                if let Some(diff) = error.diff() {
                    self.write_diff(diff)?;
                }
            }
        }

        self.write_summary(report.error_count())
    }

    /// Writes the closing summary of a failed run.
    pub fn write_summary(&mut self, total_errors: usize) -> std::io::Result<()> {
        let message = format!("✗ Found {} error(s)", total_errors);
        if self.use_colors {
            writeln!(self.writer, "\n{}", message.red().bold())?;
        } else {
            writeln!(self.writer, "\n{}", message)?;
        }
        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
