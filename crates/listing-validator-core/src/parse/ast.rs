//! Data structures for parsed listing files.

use super::lexer::{row_label, split_row_cells};
use super::section::Section;
use serde::Serialize;
use std::fmt::{self, Display};

/// A single data line collected from a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// The raw line text, without its line ending.
    pub text: String,
    /// The line number (1-based).
    pub line: usize,
}

impl Row {
    /// Creates a new row.
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    /// Returns the pipe-delimited cells of this row.
    pub fn cells(&self) -> Vec<&str> {
        split_row_cells(&self.text)
    }

    /// Returns the lower-cased link label that opens this row.
    pub fn sort_key(&self) -> Option<String> {
        row_label(&self.text).map(str::to_lowercase)
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The rows of a listing file, grouped by section in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Rows of the libraries table.
    pub libraries: Vec<Row>,
    /// Rows of the software table.
    pub software: Vec<Row>,
    /// Rows of the non-believers table.
    pub non_believers: Vec<Row>,
}

impl Listing {
    /// Creates an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows of a section.
    pub fn rows(&self, section: Section) -> &[Row] {
        match section {
            Section::Libraries => &self.libraries,
            Section::Software => &self.software,
            Section::NonBelievers => &self.non_believers,
        }
    }

    /// Appends a row to a section.
    pub fn push(&mut self, section: Section, row: Row) {
        match section {
            Section::Libraries => self.libraries.push(row),
            Section::Software => self.software.push(row),
            Section::NonBelievers => self.non_believers.push(row),
        }
    }

    /// Returns the total number of rows across all sections.
    pub fn len(&self) -> usize {
        self.libraries.len() + self.software.len() + self.non_believers.len()
    }

    /// Returns true if no section has any rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
