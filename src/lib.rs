//! Rename scanned PDFs to the batch number printed on their first page.
//!
//! Page 1 of each PDF in a folder is rendered with `pdftoppm`, read with
//! `tesseract`, and the file is renamed to `<batch number>.pdf` unless it
//! already has that name or another file holds it.

pub mod cli;
pub mod decision;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod pdf;
pub mod processor;
pub mod progress;
pub mod renamer;
pub mod report;
pub mod scanner;

pub use decision::{decide, FileFailure, RenameOutcome};
pub use error::RunError;
pub use extract::{extract_batch_number, BatchIdentifier};
pub use processor::BatchProcessor;
pub use report::{RunCounters, RunReport};

use cli::Args;
use log::info;
use ocr::TesseractRecognizer;
use pdf::PdftoppmRenderer;

/// Run the tool for parsed command line arguments.
pub fn run(args: &Args) -> Result<RunReport, RunError> {
    let folder = args.folder.as_deref().ok_or(RunError::MissingParameter)?;

    let recognizer = TesseractRecognizer::initialize(args.ocr_config())?;
    let renderer = PdftoppmRenderer::new(&args.pdftoppm);

    let processor =
        BatchProcessor::new(renderer, recognizer).with_progress(!args.no_progress && !args.verbose);
    let report = processor.process_folder(folder)?;

    if let Some(path) = &args.report {
        report.write_json(path).map_err(RunError::Report)?;
        info!("Report written to {}", path.display());
    }

    Ok(report)
}
