//! Line classifiers for listing files.
//!
//! This module contains the nom-based parsers and small predicates that
//! recognize delimiter rows, section terminators, table rows and the
//! link label at the start of a row.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till1},
    character::complete::char,
    sequence::delimited,
};

/// Opening of the alignment row that ends every table heading.
pub const DELIMITER_PREFIX: &str = "|:-|:-";

/// Opening of the attribute block that closes every data table.
pub const TERMINATOR_PREFIX: &str = "{: rules";

/// Characters that may not end a description cell.
pub const DESCRIPTION_TERMINALS: [char; 2] = ['.', '!'];

/// Parses the opening of a delimiter row such as `|:-|:-|:-|`.
///
/// Only the prefix is matched; whatever follows is not inspected.
pub fn parse_delimiter_row(input: &str) -> IResult<&str, &str> {
    tag(DELIMITER_PREFIX).parse(input)
}

/// Checks if a line ends a section heading.
pub fn is_delimiter_row(line: &str) -> bool {
    parse_delimiter_row(line).is_ok()
}

/// Parses the opening of a section terminator such as `{: rules="groups"}`.
pub fn parse_section_terminator(input: &str) -> IResult<&str, &str> {
    tag(TERMINATOR_PREFIX).parse(input)
}

/// Checks if a line closes a data table.
pub fn is_section_terminator(line: &str) -> bool {
    parse_section_terminator(line).is_ok()
}

/// Checks if a line has leading or trailing whitespace.
pub fn has_surrounding_whitespace(line: &str) -> bool {
    line.trim() != line
}

/// Splits a table row into its cells.
///
/// The row must start with `| ` and end with ` |`; the text in between is
/// split on ` | `. Lines that don't have that shape yield no cells.
pub fn split_row_cells(line: &str) -> Vec<&str> {
    match line
        .strip_prefix("| ")
        .and_then(|rest| rest.strip_suffix(" |"))
    {
        Some(interior) => interior.split(" | ").collect(),
        None => Vec::new(),
    }
}

/// Parses the bracketed link label that opens a row (`| [Label]...`).
pub fn parse_row_label(input: &str) -> IResult<&str, &str> {
    delimited(tag("| ["), take_till1(|c: char| c == ']'), char(']')).parse(input)
}

/// Returns the link label at the start of a row, if there is one.
pub fn row_label(line: &str) -> Option<&str> {
    parse_row_label(line).ok().map(|(_, label)| label)
}

/// Checks if a description cell ends in forbidden punctuation.
pub fn has_trailing_punctuation(description: &str) -> bool {
    description.ends_with(DESCRIPTION_TERMINALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_row_compact() {
        assert!(is_delimiter_row("|:-|:-|:-|:-|"));
        assert!(is_delimiter_row("|:-|:-|"));
        assert!(is_delimiter_row("|:-|:-"));
    }

    #[test]
    fn delimiter_row_ignores_other_alignment_rows() {
        assert!(!is_delimiter_row("|---|---|---|---|"));
        assert!(!is_delimiter_row("|:--|:--|"));
        assert!(!is_delimiter_row("| :-: | :-: |"));
        assert!(!is_delimiter_row("|:-|"));
    }

    #[test]
    fn delimiter_row_rejects_other_lines() {
        assert!(!is_delimiter_row("| Name | Description |"));
        assert!(!is_delimiter_row(" |:-|:-|"));
        assert!(!is_delimiter_row("# Libraries"));
        assert!(!is_delimiter_row(""));
    }

    #[test]
    fn terminator_detection() {
        assert!(is_section_terminator("{: rules=\"groups\"}"));
        assert!(is_section_terminator("{: rules}"));
        assert!(!is_section_terminator("{:.table}"));
        assert!(!is_section_terminator("{: .note}"));
        assert!(!is_section_terminator(" {: rules}"));
        assert!(!is_section_terminator("| [A](a) | b |"));
    }

    #[test]
    fn surrounding_whitespace() {
        assert!(has_surrounding_whitespace(" | [A](a) | b |"));
        assert!(has_surrounding_whitespace("| [A](a) | b | "));
        assert!(has_surrounding_whitespace("| [A](a) | b |\t"));
        assert!(!has_surrounding_whitespace("| [A](a) | b |"));
        assert!(!has_surrounding_whitespace(""));
    }

    #[test]
    fn split_cells_well_formed() {
        assert_eq!(
            split_row_cells("| [Alpha](y) | l | Desc | extra |"),
            vec!["[Alpha](y)", "l", "Desc", "extra"]
        );
    }

    #[test]
    fn split_cells_single_cell() {
        assert_eq!(split_row_cells("| [Tool](z) |"), vec!["[Tool](z)"]);
    }

    #[test]
    fn split_cells_malformed() {
        assert!(split_row_cells("[Tool](z) | reason |").is_empty());
        assert!(split_row_cells("| [Tool](z) | reason").is_empty());
        assert!(split_row_cells("| |").is_empty());
        assert!(split_row_cells("").is_empty());
    }

    #[test]
    fn split_cells_keeps_inner_pipes_without_spaces() {
        assert_eq!(
            split_row_cells("| [A](a) | x|y |"),
            vec!["[A](a)", "x|y"]
        );
    }

    #[test]
    fn row_label_extraction() {
        assert_eq!(row_label("| [Alpha](y) | l |"), Some("Alpha"));
        assert_eq!(row_label("| [Big Thing](u) |"), Some("Big Thing"));
    }

    #[test]
    fn row_label_missing() {
        assert_eq!(row_label("| Alpha | l |"), None);
        assert_eq!(row_label("| [] | l |"), None);
        assert_eq!(row_label("|[Alpha](y) | l |"), None);
        assert_eq!(row_label("| [Alpha"), None);
    }

    #[test]
    fn trailing_punctuation() {
        assert!(has_trailing_punctuation("A library."));
        assert!(has_trailing_punctuation("A library!"));
        assert!(!has_trailing_punctuation("A library?"));
        assert!(!has_trailing_punctuation("A library;"));
        assert!(!has_trailing_punctuation(""));
    }
}
