//! Diff rendering for unsorted sections.
//!
//! This module provides a trait-based abstraction over unified diff
//! rendering, with an implementation that shells out to the system `diff`.

use log::{debug, trace};
use std::io::{self, Write};
use std::process::Command;
use std::string::FromUtf8Error;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Lines of context shown around each change.
pub const CONTEXT_LINES: usize = 1;

/// Errors that can occur while rendering a diff.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A scratch file could not be created or written.
    #[error("failed to write scratch file: {0}")]
    Scratch(#[source] io::Error),

    /// The diff program could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        /// The program that was invoked.
        program: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The diff program reported trouble.
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        /// The program that was invoked.
        program: String,
        /// The exit status description.
        status: String,
        /// What the program wrote to stderr.
        stderr: String,
    },

    /// The diff output was not valid UTF-8.
    #[error("diff output is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Renders a unified diff between two orderings of the same lines.
///
/// # Example
///
/// ```rust,ignore
/// use listing_validator_core::validate::diff::{DiffError, DiffRenderer};
///
/// struct Plain;
///
/// impl DiffRenderer for Plain {
///     fn render(&self, original: &[String], sorted: &[String]) -> Result<String, DiffError> {
///         Ok(format!("{:?} -> {:?}", original, sorted))
///     }
/// }
/// ```
pub trait DiffRenderer {
    /// Renders the difference between `original` and `sorted`.
    fn render(&self, original: &[String], sorted: &[String]) -> Result<String, DiffError>;
}

/// Renders diffs with the system `diff` utility.
///
/// Both orderings are written to scratch files that are removed as soon as
/// the invocation returns, whether or not it succeeded.
#[derive(Debug, Clone)]
pub struct SystemDiff {
    program: String,
    context: usize,
}

impl Default for SystemDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemDiff {
    /// Creates a renderer that runs `diff` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("diff")
    }

    /// Creates a renderer that runs the given diff program.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            context: CONTEXT_LINES,
        }
    }
}

/// Writes lines to a fresh scratch file, one per line.
fn write_scratch(lines: &[String]) -> Result<NamedTempFile, DiffError> {
    let mut file = NamedTempFile::new().map_err(DiffError::Scratch)?;
    for line in lines {
        writeln!(file, "{}", line).map_err(DiffError::Scratch)?;
    }
    file.flush().map_err(DiffError::Scratch)?;
    trace!("Wrote {} lines to {}", lines.len(), file.path().display());
    Ok(file)
}

impl DiffRenderer for SystemDiff {
    fn render(&self, original: &[String], sorted: &[String]) -> Result<String, DiffError> {
        let original_file = write_scratch(original)?;
        let sorted_file = write_scratch(sorted)?;

        debug!("Running {} -U{} -d", self.program, self.context);
        let output = Command::new(&self.program)
            .arg(format!("-U{}", self.context))
            .arg("-d")
            .args(["-L", "original", "-L", "sorted"])
            .arg(original_file.path())
            .arg(sorted_file.path())
            .output()
            .map_err(|source| DiffError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // 0 means identical, 1 means the inputs differ; anything else is trouble.
        match output.status.code() {
            Some(0) | Some(1) => Ok(String::from_utf8(output.stdout)?),
            _ => Err(DiffError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn diff_available() -> bool {
        Command::new("diff").arg("--version").output().is_ok()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn system_diff_shows_moved_line() {
        if !diff_available() {
            return;
        }
        let original = lines(&["| [Bravo](x) |", "| [Alpha](y) |"]);
        let sorted = lines(&["| [Alpha](y) |", "| [Bravo](x) |"]);

        let diff = SystemDiff::new().render(&original, &sorted).unwrap();
        assert!(diff.contains("--- original"));
        assert!(diff.contains("+++ sorted"));
        assert!(diff.contains("@@"));
        assert!(diff.lines().any(|l| l == "+| [Alpha](y) |" || l == "-| [Alpha](y) |"));
    }

    #[test]
    fn system_diff_identical_input_is_empty() {
        if !diff_available() {
            return;
        }
        let same = lines(&["a", "b"]);
        let diff = SystemDiff::new().render(&same, &same).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let renderer = SystemDiff::with_program("definitely-not-a-diff-program-xyz");
        let err = renderer.render(&lines(&["a"]), &lines(&["b"])).unwrap_err();
        assert!(matches!(err, DiffError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-diff-program-xyz"));
    }

    /// Returns the two scratch paths at the end of an echoed argument list.
    fn scratch_paths(echoed: &str) -> Vec<PathBuf> {
        let words: Vec<_> = echoed.split_whitespace().collect();
        words[words.len() - 2..].iter().map(PathBuf::from).collect()
    }

    #[test]
    fn arguments_passed_to_program() {
        if Command::new("echo").output().is_err() {
            return;
        }
        let output = SystemDiff::with_program("echo")
            .render(&lines(&["a"]), &lines(&["b"]))
            .unwrap();
        assert!(output.starts_with("-U1 -d -L original -L sorted "), "{output}");
    }

    #[test]
    fn scratch_files_removed_after_success() {
        if Command::new("echo").output().is_err() {
            return;
        }
        let output = SystemDiff::with_program("echo")
            .render(&lines(&["a"]), &lines(&["b"]))
            .unwrap();
        let paths = scratch_paths(&output);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| !p.exists()), "{paths:?}");
    }

    #[cfg(unix)]
    #[test]
    fn scratch_files_removed_after_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("broken-diff");
        fs::write(&script, "#!/bin/sh\necho \"$@\" >&2\nexit 2\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = SystemDiff::with_program(script.to_string_lossy());
        let err = renderer
            .render(&lines(&["a"]), &lines(&["b"]))
            .unwrap_err();
        let DiffError::Failed { stderr, .. } = &err else {
            panic!("expected a failed diff, got {err:?}");
        };
        let paths = scratch_paths(stderr);
        assert!(paths.iter().all(|p| p.is_absolute()), "{paths:?}");
        assert!(paths.iter().all(|p| !p.exists()), "{paths:?}");
    }
}
