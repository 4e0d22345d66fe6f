use crate::error::{RecognitionError, SetupError};
use crate::pdf::PageImage;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Produces plain text from a rendered page.
pub trait TextRecognizer {
    fn recognize(&self, image: &PageImage) -> Result<String, RecognitionError>;
}

/// Settings for the tesseract engine.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub program: PathBuf,
    pub lang: String,
    /// Directory holding `<lang>.traineddata`; tesseract's own default when unset.
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("tesseract"),
            lang: "eng".to_string(),
            tessdata_dir: None,
        }
    }
}

/// OCR through the `tesseract` command line tool.
///
/// Build once with [`TesseractRecognizer::initialize`] and reuse for every file.
#[derive(Debug)]
pub struct TesseractRecognizer {
    config: OcrConfig,
}

impl TesseractRecognizer {
    /// Check the engine and language data before the first file is processed.
    pub fn initialize(config: OcrConfig) -> Result<Self, SetupError> {
        if let Some(dir) = &config.tessdata_dir {
            ensure_language_data(dir, &config.lang)?;
        }

        let program = config.program.display().to_string();
        let output = Command::new(&config.program)
            .arg("--version")
            .output()
            .map_err(|e| SetupError::EngineUnavailable {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SetupError::EngineUnavailable {
                program,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // tesseract 3.x prints its version to stderr
        let version = if output.stdout.is_empty() {
            &output.stderr
        } else {
            &output.stdout
        };
        info!(
            "Using {} (lang: {})",
            String::from_utf8_lossy(version).lines().next().unwrap_or("tesseract"),
            config.lang
        );

        Ok(Self { config })
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &PageImage) -> Result<String, RecognitionError> {
        debug!("Converting {} to text via OCR", image.path().display());

        let mut command = Command::new(&self.config.program);
        command
            .arg(image.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.lang);
        if let Some(dir) = &self.config.tessdata_dir {
            command.arg("--tessdata-dir").arg(dir);
        }

        let output = command.output().map_err(|source| RecognitionError::Spawn {
            program: self.config.program.display().to_string(),
            source,
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(RecognitionError::CommandFailed {
                image: image.path().to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

fn ensure_language_data(dir: &Path, lang: &str) -> Result<(), SetupError> {
    let trained = dir.join(format!("{lang}.traineddata"));
    if trained.is_file() {
        Ok(())
    } else {
        Err(SetupError::MissingLanguageData {
            lang: lang.to_string(),
            dir: dir.to_path_buf(),
        })
    }
}
