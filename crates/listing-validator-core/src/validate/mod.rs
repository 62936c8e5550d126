//! Validation module for listing files.
//!
//! This module checks that every section of a parsed listing is sorted by
//! its rows' link labels, rendering a diff for sections that are not.
//!
//! # Example
//!
//! ```rust
//! use listing_validator_core::parse::parse_listing;
//! use listing_validator_core::validate::checks::CheckRunner;
//! use listing_validator_core::validate::diff::SystemDiff;
//!
//! let input = "|:-|:-|:-|:-|\n| [Alpha](a) | rust | A parser | yes |\n";
//! let parse_result = parse_listing(input);
//!
//! let validation = CheckRunner::with_all_checks().run(&parse_result.listing, &SystemDiff::new());
//! if validation.is_ok() {
//!     println!("Every section is sorted!");
//! } else {
//!     for error in &validation.errors {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```

pub mod checks;
pub mod diff;
mod error;
pub mod sort;

// Re-export public types
pub use error::{ValidationError, ValidationResult};
pub use sort::{TRUNCATE_WIDTH, check_section_order, sorted_rows};
