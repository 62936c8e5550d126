//! Error types for listing file parsing.
//!
//! This module defines the violations the document walker records while
//! reading a listing file, along with the line they were found on.

use super::ast::Listing;
use super::section::Section;
use serde::Serialize;
use thiserror::Error;

/// A formatting violation found while walking a listing file.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParseError {
    /// A data row starts or ends with whitespace.
    #[error("line {line}: leading/trailing whitespace: {text}")]
    SurroundingWhitespace {
        /// The line number (1-based).
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A data row doesn't split into the number of cells its section needs.
    #[error(
        "line {line}: does not match expected column format ({expected} columns, found {found}): {text}"
    )]
    ColumnFormat {
        /// The line number (1-based).
        line: usize,
        /// The section the row belongs to.
        section: Section,
        /// Number of cells the section requires.
        expected: usize,
        /// Number of cells the row split into.
        found: usize,
        /// The offending line.
        text: String,
    },

    /// A description cell ends in `.` or `!`.
    #[error("line {line}: trailing punctuation in description: {text}")]
    TrailingPunctuation {
        /// The line number (1-based).
        line: usize,
        /// The description cell.
        description: String,
        /// The offending line.
        text: String,
    },

    /// Content found after the last section was closed.
    #[error("line {line}: trailing junk at end of file: {text}")]
    TrailingContent {
        /// The line number (1-based).
        line: usize,
        /// The offending line.
        text: String,
    },
}

impl ParseError {
    /// Creates a surrounding whitespace error.
    pub fn surrounding_whitespace(line: usize, text: impl Into<String>) -> Self {
        Self::SurroundingWhitespace {
            line,
            text: text.into(),
        }
    }

    /// Creates a column format error.
    pub fn column_format(
        line: usize,
        section: Section,
        found: usize,
        text: impl Into<String>,
    ) -> Self {
        Self::ColumnFormat {
            line,
            section,
            expected: section.column_count(),
            found,
            text: text.into(),
        }
    }

    /// Creates a trailing punctuation error.
    pub fn trailing_punctuation(
        line: usize,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::TrailingPunctuation {
            line,
            description: description.into(),
            text: text.into(),
        }
    }

    /// Creates a trailing content error.
    pub fn trailing_content(line: usize, text: impl Into<String>) -> Self {
        Self::TrailingContent {
            line,
            text: text.into(),
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::SurroundingWhitespace { line, .. } => *line,
            ParseError::ColumnFormat { line, .. } => *line,
            ParseError::TrailingPunctuation { line, .. } => *line,
            ParseError::TrailingContent { line, .. } => *line,
        }
    }

    /// Returns the offending line text.
    pub fn text(&self) -> &str {
        match self {
            ParseError::SurroundingWhitespace { text, .. } => text,
            ParseError::ColumnFormat { text, .. } => text,
            ParseError::TrailingPunctuation { text, .. } => text,
            ParseError::TrailingContent { text, .. } => text,
        }
    }
}

/// The result of walking a listing file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The rows collected per section.
    pub listing: Listing,
    /// Every violation recorded during the walk, in line order.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result with no errors.
    pub fn ok(listing: Listing) -> Self {
        Self {
            listing,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with errors.
    pub fn with_errors(listing: Listing, errors: Vec<ParseError>) -> Self {
        Self { listing, errors }
    }

    /// Returns true if parsing succeeded without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there were parse errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
