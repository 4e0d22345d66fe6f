use crate::ocr::OcrConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pdf-batch-renamer")]
#[command(about = "Rename PDFs to the batch number printed on their first page")]
#[command(version)]
pub struct Args {
    /// Folder containing the PDFs to rename
    #[arg(short, long, value_name = "PATH")]
    pub folder: Option<PathBuf>,

    /// Directory holding the tesseract language data
    #[arg(long, env = "TESSDATA_PREFIX", value_name = "DIR")]
    pub tessdata_dir: Option<PathBuf>,

    /// OCR language
    #[arg(short, long, default_value = "eng")]
    pub lang: String,

    /// tesseract executable
    #[arg(long, env = "TESSERACT_BIN", default_value = "tesseract")]
    pub tesseract: PathBuf,

    /// pdftoppm executable (poppler-utils)
    #[arg(long, env = "PDFTOPPM_BIN", default_value = "pdftoppm")]
    pub pdftoppm: PathBuf,

    /// Write a JSON report of every file's outcome
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn ocr_config(&self) -> OcrConfig {
        OcrConfig {
            program: self.tesseract.clone(),
            lang: self.lang.clone(),
            tessdata_dir: self.tessdata_dir.clone(),
        }
    }
}
