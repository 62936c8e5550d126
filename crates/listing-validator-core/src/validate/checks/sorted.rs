//! Section sort order check.
//!
//! This check verifies that a section's rows are ordered by their
//! lower-cased link label.

use super::{Check, CheckContext};
use crate::parse::Section;
use crate::validate::ValidationResult;
use crate::validate::sort::check_section_order;

/// A check that validates the order of one listing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedCheck {
    section: Section,
}

impl SortedCheck {
    /// Creates a sort check for the given section.
    pub fn new(section: Section) -> Self {
        Self { section }
    }
}

impl Check for SortedCheck {
    fn name(&self) -> &'static str {
        match self.section {
            Section::Libraries => "sorted-libraries",
            Section::Software => "sorted-software",
            Section::NonBelievers => "sorted-non-believers",
        }
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(error) =
            check_section_order(self.section, ctx.listing.rows(self.section), ctx.renderer)
        {
            result.add_error(error);
        }
        result
    }
}
