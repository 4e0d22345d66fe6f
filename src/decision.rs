//! Decides what happens to a file once its batch number is known.

use crate::error::{RecognitionError, RenameError, RenderError};
use crate::extract::BatchIdentifier;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Terminal state of one file in a run.
#[derive(Debug)]
pub enum RenameOutcome {
    /// Renamed (or, coming out of [`decide`], to be renamed) to this path.
    Renamed(PathBuf),
    SkippedAlreadyNamed,
    SkippedNoIdentifier,
    /// A different file already holds the target name.
    RejectedCollision(PathBuf),
    Failed(FileFailure),
}

impl RenameOutcome {
    /// Short snake_case label used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            RenameOutcome::Renamed(_) => "renamed",
            RenameOutcome::SkippedAlreadyNamed => "skipped_already_named",
            RenameOutcome::SkippedNoIdentifier => "skipped_no_identifier",
            RenameOutcome::RejectedCollision(_) => "rejected_collision",
            RenameOutcome::Failed(_) => "failed",
        }
    }
}

/// Why a single file could not be handled. Never aborts the run.
#[derive(Error, Debug)]
pub enum FileFailure {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    #[error(transparent)]
    Rename(#[from] RenameError),

    #[error("batch number `{0}` is not usable as a file name")]
    InvalidIdentifier(String),
}

/// Work out whether `current` should be renamed to match `id`.
///
/// Nothing is touched on disk; `exists` is consulted for the collision check.
pub fn decide(
    current: &Path,
    id: &BatchIdentifier,
    exists: impl Fn(&Path) -> bool,
) -> RenameOutcome {
    if !is_plain_file_name(id.as_str()) {
        return RenameOutcome::Failed(FileFailure::InvalidIdentifier(id.to_string()));
    }

    let target = match current.parent() {
        Some(parent) => parent.join(id.file_name()),
        None => PathBuf::from(id.file_name()),
    };

    let already_named = current
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| id.matches_file_name(name));
    if already_named {
        return RenameOutcome::SkippedAlreadyNamed;
    }

    if exists(&target) {
        return RenameOutcome::RejectedCollision(target);
    }

    RenameOutcome::Renamed(target)
}

fn is_plain_file_name(value: &str) -> bool {
    !value.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> BatchIdentifier {
        BatchIdentifier::new(value).unwrap()
    }

    #[test]
    fn renames_into_same_folder() {
        let outcome = decide(Path::new("/scans/doc_001.pdf"), &id("778899"), |_| false);
        match outcome {
            RenameOutcome::Renamed(target) => {
                assert_eq!(target, PathBuf::from("/scans/778899.pdf"))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn skips_file_already_named_ignoring_case() {
        let outcome = decide(Path::new("/scans/ab-12.PDF"), &id("AB-12"), |_| {
            panic!("existence must not be checked for an already named file")
        });
        assert!(matches!(outcome, RenameOutcome::SkippedAlreadyNamed));
    }

    #[test]
    fn rejects_existing_target() {
        let outcome = decide(Path::new("/scans/doc.pdf"), &id("42"), |p| {
            p == Path::new("/scans/42.pdf")
        });
        match outcome {
            RenameOutcome::RejectedCollision(existing) => {
                assert_eq!(existing, PathBuf::from("/scans/42.pdf"))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn relative_path_without_parent() {
        let outcome = decide(Path::new("doc.pdf"), &id("7"), |_| false);
        match outcome {
            RenameOutcome::Renamed(target) => assert_eq!(target, PathBuf::from("7.pdf")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rejects_identifiers_that_leave_the_folder() {
        for bad in ["../up", "a/b", "a\\b"] {
            let outcome = decide(Path::new("/scans/doc.pdf"), &id(bad), |_| false);
            assert!(
                matches!(outcome, RenameOutcome::Failed(FileFailure::InvalidIdentifier(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn dot_identifiers_stay_in_folder() {
        for (dots, expected) in [(".", "/scans/..pdf"), ("..", "/scans/...pdf")] {
            match decide(Path::new("/scans/doc.pdf"), &id(dots), |_| false) {
                RenameOutcome::Renamed(target) => assert_eq!(target, PathBuf::from(expected)),
                other => panic!("unexpected outcome for {dots}: {other:?}"),
            }
        }
    }
}
