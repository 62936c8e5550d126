//! Listing Validator Core
//!
//! A library for parsing and validating markdown community listing files.
//!
//! A listing file holds three tables (libraries, software and
//! non-believers), each closed by a `{: rules ...}` attribute block. Validation
//! walks the file section by section, checks every row's shape, and then
//! checks that each section is sorted by the lower-cased link label at the
//! start of its rows.
//!
//! # Quick Start
//!
//! ```rust
//! use listing_validator_core::check_listing;
//! use listing_validator_core::validate::diff::SystemDiff;
//!
//! let input = "\
//! Libraries:
//! |:-|:-|:-|:-|
//! | [Alpha](https://a.example) | rust | A parser | yes |
//! {: rules=\"groups\"}
//! ";
//!
//! let report = check_listing(input, &SystemDiff::new());
//! if report.is_ok() {
//!     println!("listing is valid!");
//! } else {
//!     for error in &report.parse.errors {
//!         eprintln!("{}", error);
//!     }
//!     for error in &report.ordering.errors {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Document walker for listing files
//! - [`validate`]: Sort order checks for parsed listings

pub mod parse;
pub mod validate;

// Re-export commonly used types at the crate root
pub use parse::{Listing, ParseError, ParseResult, Row, Section, parse_listing};
pub use validate::checks::{Check, CheckContext, CheckRunner};
pub use validate::diff::{DiffError, DiffRenderer, SystemDiff};
pub use validate::{ValidationError, ValidationResult};

use log::info;

/// Name of the listing file checked by default, relative to the working
/// directory.
pub const DEFAULT_LISTING_PATH: &str = "index.md";

/// Everything found while checking a listing file.
#[derive(Debug, Clone)]
pub struct ListingReport {
    /// Rows and formatting violations from the document walk.
    pub parse: ParseResult,
    /// Ordering violations, in section order.
    pub ordering: ValidationResult,
}

impl ListingReport {
    /// Returns true if no check failed.
    pub fn is_ok(&self) -> bool {
        self.parse.is_ok() && self.ordering.is_ok()
    }

    /// Returns the total number of violations.
    pub fn error_count(&self) -> usize {
        self.parse.errors.len() + self.ordering.errors.len()
    }
}

/// Walks a listing file and checks the order of every section.
///
/// Parsing completes before any section is sort-checked, and every check
/// runs even when an earlier one failed.
pub fn check_listing(input: &str, renderer: &dyn DiffRenderer) -> ListingReport {
    let parse = parse_listing(input);
    let ordering = CheckRunner::with_all_checks().run(&parse.listing, renderer);
    let report = ListingReport { parse, ordering };
    info!("Listing checked: {} violation(s)", report.error_count());
    report
}
