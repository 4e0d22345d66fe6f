use crate::decision::RenameOutcome;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Per-run tallies, owned by the processor and handed back at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    pub files_processed: usize,
    pub files_renamed: usize,
}

impl RunCounters {
    /// Final console line, or `None` when no file was seen.
    pub fn summary_line(&self) -> Option<String> {
        (self.files_processed > 0).then(|| {
            format!(
                "{} file(s) renamed of {} found.",
                self.files_renamed, self.files_processed
            )
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileRecord {
    pub fn new(path: &Path, outcome: &RenameOutcome) -> Self {
        let (target, detail) = match outcome {
            RenameOutcome::Renamed(target) | RenameOutcome::RejectedCollision(target) => {
                (Some(target.clone()), None)
            }
            RenameOutcome::Failed(failure) => (None, Some(failure.to_string())),
            RenameOutcome::SkippedAlreadyNamed | RenameOutcome::SkippedNoIdentifier => {
                (None, None)
            }
        };

        Self {
            path: path.to_path_buf(),
            outcome: outcome.label(),
            target,
            detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub folder: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(flatten)]
    pub counters: RunCounters,
    pub files: Vec<FileRecord>,
}

impl RunReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}
