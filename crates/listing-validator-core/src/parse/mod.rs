//! Parser module for listing files.
//!
//! This module walks a markdown listing file section by section, collecting
//! the rows of each table and recording formatting violations along the way.
//!
//! # Example
//!
//! ```rust
//! use listing_validator_core::parse::{parse_listing, Section};
//!
//! let input = "\
//! |:-|:-|:-|:-|
//! | [Alpha](a) | rust | Does things. | yes |
//! {: rules=\"groups\"}
//! ";
//!
//! let result = parse_listing(input);
//! for error in &result.errors {
//!     println!("{}", error);
//! }
//! assert_eq!(result.listing.rows(Section::Libraries).len(), 1);
//! ```

mod ast;
mod error;
mod lexer;
mod section;
mod walker;

// Re-export public types
pub use ast::{Listing, Row};
pub use error::{ParseError, ParseResult};
pub use section::Section;
pub use walker::{WalkerState, parse_listing};

// Re-export lexer utilities that may be useful for custom checks
pub use lexer::{is_delimiter_row, is_section_terminator, row_label, split_row_cells};
