//! The document walker for listing files.
//!
//! A listing file is read line by line while a small state machine moves
//! through its parts: a header, the libraries table, a header, the software
//! table, a header, the non-believers table and finally the trailer. The
//! state only ever moves forward.

use super::ast::{Listing, Row};
use super::error::{ParseError, ParseResult};
use super::lexer::{
    has_surrounding_whitespace, has_trailing_punctuation, is_delimiter_row, is_section_terminator,
};
use super::section::Section;
use log::{debug, trace};

/// Where the walker is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    /// Prose and table headings preceding a section's rows.
    Header(Section),
    /// Inside a section's table rows.
    Data(Section),
    /// After the last section was closed.
    Trailer,
}

impl WalkerState {
    /// The state the walker starts in.
    pub const START: WalkerState = WalkerState::Header(Section::Libraries);

    /// Returns the state that follows this one.
    pub fn next(self) -> WalkerState {
        match self {
            WalkerState::Header(section) => WalkerState::Data(section),
            WalkerState::Data(Section::Libraries) => WalkerState::Header(Section::Software),
            WalkerState::Data(Section::Software) => WalkerState::Header(Section::NonBelievers),
            WalkerState::Data(Section::NonBelievers) => WalkerState::Trailer,
            WalkerState::Trailer => WalkerState::Trailer,
        }
    }
}

/// Line-by-line walker that collects rows and violations.
#[derive(Debug)]
struct Walker {
    state: WalkerState,
    listing: Listing,
    errors: Vec<ParseError>,
}

impl Walker {
    fn new() -> Self {
        Self {
            state: WalkerState::START,
            listing: Listing::new(),
            errors: Vec::new(),
        }
    }

    fn advance(&mut self, line_num: usize) {
        let next = self.state.next();
        debug!("Line {}: {:?} -> {:?}", line_num, self.state, next);
        self.state = next;
    }

    fn feed(&mut self, line_num: usize, text: &str) {
        match self.state {
            WalkerState::Header(_) => {
                if is_delimiter_row(text) {
                    self.advance(line_num);
                } else {
                    trace!("Line {}: header text", line_num);
                }
            }
            WalkerState::Data(section) => self.feed_row(section, line_num, text),
            WalkerState::Trailer => {
                debug!("Line {}: content after last section", line_num);
                self.errors.push(ParseError::trailing_content(line_num, text));
            }
        }
    }

    fn feed_row(&mut self, section: Section, line_num: usize, text: &str) {
        if is_section_terminator(text) {
            self.advance(line_num);
            return;
        }

        if has_surrounding_whitespace(text) {
            debug!("Line {}: surrounding whitespace, row dropped", line_num);
            self.errors.push(ParseError::surrounding_whitespace(line_num, text));
            return;
        }

        let row = Row::new(text, line_num);
        let cells = row.cells();
        if cells.len() != section.column_count() {
            debug!(
                "Line {}: {} cells, {} section needs {}",
                line_num,
                cells.len(),
                section,
                section.column_count()
            );
            self.errors.push(ParseError::column_format(
                line_num,
                section,
                cells.len(),
                text,
            ));
        } else if let Some(index) = section.description_column()
            && has_trailing_punctuation(cells[index])
        {
            self.errors.push(ParseError::trailing_punctuation(
                line_num,
                cells[index],
                text,
            ));
        }

        trace!("Line {}: {} row collected", line_num, section);
        self.listing.push(section, row);
    }

    fn finish(self) -> ParseResult {
        debug!(
            "Walk finished in {:?}: {} rows, {} errors",
            self.state,
            self.listing.len(),
            self.errors.len()
        );
        if self.errors.is_empty() {
            ParseResult::ok(self.listing)
        } else {
            ParseResult::with_errors(self.listing, self.errors)
        }
    }
}

/// Walks a listing file, collecting each section's rows and every
/// formatting violation.
///
/// Lines are split on `\n` only, so a carriage return stays part of its
/// line. Running out of input before the last section is closed is not an
/// error.
///
/// # Example
///
/// ```rust
/// use listing_validator_core::parse::{parse_listing, Section};
///
/// let input = "\
/// Libraries:
/// |:-|:-|:-|:-|
/// | [Alpha](a) | rust | Does things | yes |
/// {: rules=\"groups\"}
/// ";
///
/// let result = parse_listing(input);
/// assert!(result.is_ok());
/// assert_eq!(result.listing.rows(Section::Libraries).len(), 1);
/// ```
pub fn parse_listing(input: &str) -> ParseResult {
    debug!("Walking listing file ({} bytes)", input.len());
    let mut walker = Walker::new();

    for (line_idx, line_text) in input.split_terminator('\n').enumerate() {
        walker.feed(line_idx + 1, line_text);
    }

    walker.finish()
}
