//! Sort order validation for listing sections.
//!
//! Rows are ordered by their lower-cased link label, with the row's
//! position in the section breaking ties, so equal labels keep their
//! original relative order.

use super::diff::DiffRenderer;
use super::error::ValidationError;
use crate::parse::{Row, Section};
use log::{debug, warn};

/// Width each line is cut to before diffing.
pub const TRUNCATE_WIDTH: usize = 80;

/// Returns the rows in sorted order.
///
/// Fails with the first row that has no link label to sort by.
pub fn sorted_rows(rows: &[Row]) -> Result<Vec<&Row>, &Row> {
    let mut keyed = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row.sort_key().map(|key| (key, index, row)).ok_or(row))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a_key, a_index, _), (b_key, b_index, _)| {
        a_key.cmp(b_key).then(a_index.cmp(b_index))
    });

    Ok(keyed.into_iter().map(|(_, _, row)| row).collect())
}

/// Cuts a line to at most `width` characters.
pub fn truncate_line(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

fn truncated<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<String> {
    rows.into_iter()
        .map(|row| truncate_line(&row.text, TRUNCATE_WIDTH))
        .collect()
}

/// Checks that a section's rows are sorted.
///
/// Returns `None` if they are. An unsorted section yields an error carrying
/// a diff of the truncated rows; a row without a label yields an error
/// naming that row. A diff that can't be rendered is replaced by a note.
pub fn check_section_order(
    section: Section,
    rows: &[Row],
    renderer: &dyn DiffRenderer,
) -> Option<ValidationError> {
    let sorted = match sorted_rows(rows) {
        Ok(sorted) => sorted,
        Err(row) => {
            debug!("{} section: line {} has no sort key", section, row.line);
            return Some(ValidationError::missing_sort_key(
                section, row.line, &row.text,
            ));
        }
    };

    if rows.iter().zip(&sorted).all(|(a, b)| a.text == b.text) {
        debug!("{} section is sorted ({} rows)", section, rows.len());
        return None;
    }

    debug!("{} lines are not sorted, rendering diff", section);
    let diff = match renderer.render(&truncated(rows), &truncated(sorted)) {
        Ok(diff) => diff,
        Err(e) => {
            warn!("Could not render diff for {} section: {}", section, e);
            format!("(diff unavailable: {})\n", e)
        }
    };

    Some(ValidationError::unsorted(section, diff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::diff::DiffError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(Vec<String>, Vec<String>)>>,
    }

    impl DiffRenderer for RecordingRenderer {
        fn render(&self, original: &[String], sorted: &[String]) -> Result<String, DiffError> {
            self.calls
                .borrow_mut()
                .push((original.to_vec(), sorted.to_vec()));
            Ok("recorded diff\n".to_string())
        }
    }

    struct FailingRenderer;

    impl DiffRenderer for FailingRenderer {
        fn render(&self, _: &[String], _: &[String]) -> Result<String, DiffError> {
            Err(DiffError::Failed {
                program: "diff".to_string(),
                status: "exit status: 2".to_string(),
                stderr: "boom".to_string(),
            })
        }
    }

    fn rows(texts: &[&str]) -> Vec<Row> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Row::new(*text, i + 1))
            .collect()
    }

    fn texts(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|row| row.text.clone()).collect()
    }

    #[test]
    fn sorts_case_insensitively() {
        let input = rows(&["| [bravo](b) |", "| [Alpha](a) |", "| [charlie](c) |"]);
        let sorted = sorted_rows(&input).unwrap();
        assert_eq!(
            texts(&sorted),
            vec!["| [Alpha](a) |", "| [bravo](b) |", "| [charlie](c) |"]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let input = rows(&["| [zebra](2) |", "| [Alpha](a) |", "| [Zebra](1) |"]);
        let sorted = sorted_rows(&input).unwrap();
        assert_eq!(
            texts(&sorted),
            vec!["| [Alpha](a) |", "| [zebra](2) |", "| [Zebra](1) |"]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let input = rows(&["| [b](1) |", "| [B](2) |", "| [a](3) |", "| [A](4) |"]);
        let once: Vec<Row> = sorted_rows(&input).unwrap().into_iter().cloned().collect();
        let twice = sorted_rows(&once).unwrap();
        assert_eq!(texts(&twice), once.iter().map(|r| r.text.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn missing_label_fails_with_row() {
        let input = rows(&["| [Alpha](a) |", "| Bravo |"]);
        let err = sorted_rows(&input).unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn sorted_section_passes() {
        let renderer = RecordingRenderer::default();
        let input = rows(&["| [Alpha](a) |", "| [bravo](b) |"]);
        assert!(check_section_order(Section::Libraries, &input, &renderer).is_none());
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn empty_section_passes() {
        let renderer = RecordingRenderer::default();
        assert!(check_section_order(Section::Software, &[], &renderer).is_none());
    }

    #[test]
    fn unsorted_section_renders_diff() {
        let renderer = RecordingRenderer::default();
        let input = rows(&[
            "| [Bravo](x) | l | Desc | extra |",
            "| [Alpha](y) | l | Desc | extra |",
        ]);

        let err = check_section_order(Section::Libraries, &input, &renderer).unwrap();
        assert_eq!(err, ValidationError::unsorted(Section::Libraries, "recorded diff\n"));

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0[0], "| [Bravo](x) | l | Desc | extra |");
        assert_eq!(calls[0].1[0], "| [Alpha](y) | l | Desc | extra |");
    }

    #[test]
    fn missing_label_is_unsorted_even_when_in_order() {
        let renderer = RecordingRenderer::default();
        let input = rows(&["| [Alpha](a) |", "| bravo |"]);
        let err = check_section_order(Section::NonBelievers, &input, &renderer).unwrap();
        assert!(matches!(
            err,
            ValidationError::MissingSortKey {
                section: Section::NonBelievers,
                line: 2,
                ..
            }
        ));
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn lines_are_truncated_before_diffing() {
        let renderer = RecordingRenderer::default();
        let long = format!("| [Zulu](z) | {} |", "x".repeat(200));
        let input = vec![Row::new(long, 1), Row::new("| [Alpha](a) |", 2)];

        check_section_order(Section::Libraries, &input, &renderer).unwrap();
        let calls = renderer.calls.borrow();
        assert_eq!(calls[0].0[0].chars().count(), TRUNCATE_WIDTH);
        assert_eq!(calls[0].1[1].chars().count(), TRUNCATE_WIDTH);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_line("ééé", 2), "éé");
        assert_eq!(truncate_line("short", 80), "short");
    }

    #[test]
    fn renderer_failure_still_reports_unsorted() {
        let input = rows(&["| [b](b) |", "| [a](a) |"]);
        let err = check_section_order(Section::Software, &input, &FailingRenderer).unwrap();
        assert!(err.diff().unwrap().contains("diff unavailable"));
    }
}
