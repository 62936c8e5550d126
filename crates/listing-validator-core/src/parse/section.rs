//! The thematic sections of a listing file.

use serde::Serialize;
use std::fmt::{self, Display};

/// One of the three tables in a listing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Libraries: `| [Name](url) | ... | Description | ... |`.
    Libraries,
    /// Software projects: `| [Name](url) | Description | ... |`.
    Software,
    /// Software that declined to take part: `| [Name](url) | Reason |`.
    NonBelievers,
}

impl Section {
    /// All sections, in document order.
    pub const ALL: [Section; 3] = [Section::Libraries, Section::Software, Section::NonBelievers];

    /// Number of cells a row of this section must have.
    pub fn column_count(self) -> usize {
        match self {
            Section::Libraries => 4,
            Section::Software => 3,
            Section::NonBelievers => 2,
        }
    }

    /// Index of the description cell checked for trailing punctuation.
    pub fn description_column(self) -> Option<usize> {
        match self {
            Section::Libraries => Some(2),
            Section::Software => Some(1),
            Section::NonBelievers => None,
        }
    }

    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Section::Libraries => "Library",
            Section::Software => "Software",
            Section::NonBelievers => "Non-supporting software",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
