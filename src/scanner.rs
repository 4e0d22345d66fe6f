use crate::error::ScanError;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix a file name must end with, compared exactly (no case folding).
pub const PDF_SUFFIX: &str = ".pdf";

/// List the PDF files directly inside `dir`.
///
/// Subdirectories are not entered and the listing order is whatever the
/// filesystem returns. Only failing to read `dir` itself is an error;
/// unreadable entries such as dangling symlinks are logged and skipped.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut pdf_files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError {
                    folder: dir.to_path_buf(),
                    source,
                })
            }
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_pdf = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(PDF_SUFFIX));
        if is_pdf {
            pdf_files.push(entry.into_path());
        }
    }

    Ok(pdf_files)
}
