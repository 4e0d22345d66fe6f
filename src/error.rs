use std::path::PathBuf;
use thiserror::Error;

/// Page 1 of a PDF could not be turned into an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pdftoppm failed on {}: {stderr}", path.display())]
    CommandFailed { path: PathBuf, stderr: String },

    #[error("no rendered image produced for {}", path.display())]
    MissingOutput { path: PathBuf },

    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
}

/// The OCR engine failed on a rendered page.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tesseract failed on {}: {stderr}", image.display())]
    CommandFailed { image: PathBuf, stderr: String },
}

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("failed to rename {} to {}: {error}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// One-time OCR setup problems, reported before any file is touched.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("OCR engine `{program}` is not available: {reason}")]
    EngineUnavailable { program: String, reason: String },

    #[error("language data `{lang}.traineddata` not found in {}", dir.display())]
    MissingLanguageData { lang: String, dir: PathBuf },
}

#[derive(Error, Debug)]
#[error("Error when scanning for PDF files in folder `{}`: {source}", folder.display())]
pub struct ScanError {
    pub folder: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

/// Run-level failures that stop the folder scan.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Missing required parameters (-f or --folder) \"pathToFolder\"")]
    MissingParameter,

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to write run report: {0:#}")]
    Report(anyhow::Error),
}

impl RunError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::MissingParameter => 2,
            _ => 1,
        }
    }
}
