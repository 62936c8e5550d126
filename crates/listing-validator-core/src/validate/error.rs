//! Error types for listing validation.
//!
//! This module defines the ordering violations found after parsing.

use crate::parse::Section;
use serde::Serialize;
use thiserror::Error;

/// An ordering violation found in a listing section.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    /// The section's rows are not in sort-key order.
    #[error("{section} lines are not sorted")]
    Unsorted {
        /// The unsorted section.
        section: Section,
        /// Unified diff from the current order to the sorted order.
        diff: String,
    },

    /// A row has no link label, so the section can't be proven sorted.
    #[error("line {line}: {section} lines are not sorted: row has no [label] to sort by: {text}")]
    MissingSortKey {
        /// The section containing the row.
        section: Section,
        /// The line number of the first row without a label (1-based).
        line: usize,
        /// The offending line.
        text: String,
    },
}

impl ValidationError {
    /// Creates an unsorted section error.
    pub fn unsorted(section: Section, diff: impl Into<String>) -> Self {
        Self::Unsorted {
            section,
            diff: diff.into(),
        }
    }

    /// Creates a missing sort key error.
    pub fn missing_sort_key(section: Section, line: usize, text: impl Into<String>) -> Self {
        Self::MissingSortKey {
            section,
            line,
            text: text.into(),
        }
    }

    /// Returns the section this error belongs to.
    pub fn section(&self) -> Section {
        match self {
            ValidationError::Unsorted { section, .. } => *section,
            ValidationError::MissingSortKey { section, .. } => *section,
        }
    }

    /// Returns the line number where this error occurred, if available.
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationError::Unsorted { .. } => None,
            ValidationError::MissingSortKey { line, .. } => Some(*line),
        }
    }

    /// Returns the diff attached to this error, if any.
    pub fn diff(&self) -> Option<&str> {
        match self {
            ValidationError::Unsorted { diff, .. } => Some(diff),
            ValidationError::MissingSortKey { .. } => None,
        }
    }
}

/// The result of validating a listing file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    /// All validation errors found.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if validation passed with no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}
