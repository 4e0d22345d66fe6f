//! Per-folder orchestration: render, recognize, extract, decide, rename.

use crate::decision::{decide, FileFailure, RenameOutcome};
use crate::error::ScanError;
use crate::extract::extract_batch_number;
use crate::ocr::TextRecognizer;
use crate::pdf::PageImageProvider;
use crate::progress::ProgressTracker;
use crate::renamer;
use crate::report::{FileRecord, RunCounters, RunReport};
use crate::scanner::list_pdf_files;
use chrono::Utc;
use log::{error, info, warn};
use std::path::Path;

/// Runs the rename pipeline over every PDF in a folder, one file at a time.
pub struct BatchProcessor<P, R> {
    renderer: P,
    recognizer: R,
    show_progress: bool,
}

impl<P, R> BatchProcessor<P, R>
where
    P: PageImageProvider,
    R: TextRecognizer,
{
    /// `recognizer` must already be initialized; it is reused for every file.
    pub fn new(renderer: P, recognizer: R) -> Self {
        Self {
            renderer,
            recognizer,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Process every eligible file in `folder`.
    ///
    /// Only a failure to list the folder is returned as an error; problems
    /// with individual files end up in the report.
    pub fn process_folder(&self, folder: &Path) -> Result<RunReport, ScanError> {
        let started_at = Utc::now();
        let pdf_files = list_pdf_files(folder)?;

        if pdf_files.is_empty() {
            warn!("No PDF files found in {}", folder.display());
        } else {
            info!("Found {} PDF files", pdf_files.len());
        }

        let progress = ProgressTracker::new(pdf_files.len(), self.show_progress);
        let mut counters = RunCounters::default();
        let mut files = Vec::with_capacity(pdf_files.len());

        for pdf_path in &pdf_files {
            counters.files_processed += 1;

            let outcome = self.process_file(pdf_path);
            if matches!(outcome, RenameOutcome::Renamed(_)) {
                counters.files_renamed += 1;
            }

            files.push(FileRecord::new(pdf_path, &outcome));
            progress.increment(&pdf_path.file_name().unwrap_or_default().to_string_lossy());
        }

        progress.finish(counters.files_renamed);

        Ok(RunReport {
            folder: folder.to_path_buf(),
            started_at,
            finished_at: Utc::now(),
            counters,
            files,
        })
    }

    /// Take one file through the whole pipeline. Never fails; errors are
    /// logged and returned as [`RenameOutcome::Failed`].
    pub fn process_file(&self, pdf_path: &Path) -> RenameOutcome {
        info!("Analyzing file: `{}` ...", pdf_path.display());

        let outcome = match self.rename_to_batch_number(pdf_path) {
            Ok(outcome) => outcome,
            Err(failure) => RenameOutcome::Failed(failure),
        };

        match &outcome {
            RenameOutcome::Renamed(target) => {
                info!("Renamed `{}` to `{}`", pdf_path.display(), target.display())
            }
            RenameOutcome::SkippedAlreadyNamed => info!("File was already renamed"),
            RenameOutcome::SkippedNoIdentifier => {
                warn!("Skipping `{}` (does not contain a batch number)", pdf_path.display())
            }
            RenameOutcome::RejectedCollision(existing) => warn!(
                "A file with the same batch number already exists: `{}`",
                existing.display()
            ),
            RenameOutcome::Failed(failure) => {
                error!("Failed to process `{}`: {}", pdf_path.display(), failure)
            }
        }

        outcome
    }

    fn rename_to_batch_number(&self, pdf_path: &Path) -> Result<RenameOutcome, FileFailure> {
        let text = {
            let image = self.renderer.render(pdf_path)?;
            self.recognizer.recognize(&image)?
        };

        let Some(batch_number) = extract_batch_number(&text) else {
            return Ok(RenameOutcome::SkippedNoIdentifier);
        };
        info!("Found `Batch number: {}`", batch_number);

        let outcome = decide(pdf_path, &batch_number, |target| target.exists());
        if let RenameOutcome::Renamed(target) = &outcome {
            renamer::apply(pdf_path, target)?;
        }

        Ok(outcome)
    }
}
