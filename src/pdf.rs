use crate::error::RenderError;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Resolution page 1 is rasterized at before OCR.
pub const RENDER_DPI: u32 = 300;

/// A rendered image of a PDF's first page.
///
/// Images produced by [`PdftoppmRenderer`] live in a private temporary
/// directory which is removed when the image is dropped.
#[derive(Debug)]
pub struct PageImage {
    path: PathBuf,
    _dir: Option<TempDir>,
}

impl PageImage {
    /// Wrap an image that already exists on disk.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _dir: None,
        }
    }

    fn in_temp_dir(path: PathBuf, dir: TempDir) -> Self {
        Self {
            path,
            _dir: Some(dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Turns page 1 of a PDF into an image.
pub trait PageImageProvider {
    fn render(&self, pdf_path: &Path) -> Result<PageImage, RenderError>;
}

/// Renders with poppler's `pdftoppm`.
pub struct PdftoppmRenderer {
    program: PathBuf,
}

impl PdftoppmRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PageImageProvider for PdftoppmRenderer {
    fn render(&self, pdf_path: &Path) -> Result<PageImage, RenderError> {
        debug!("Converting page 1 of {} to an image", pdf_path.display());

        let temp_dir = tempfile::Builder::new()
            .prefix("pdf-batch-renamer")
            .tempdir()
            .map_err(RenderError::TempDir)?;
        let image_prefix = temp_dir.path().join("page");

        let output = Command::new(&self.program)
            .args(["-png", "-singlefile", "-f", "1", "-l", "1", "-r"])
            .arg(RENDER_DPI.to_string())
            .arg(pdf_path)
            .arg(&image_prefix)
            .output()
            .map_err(|source| RenderError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::CommandFailed {
                path: pdf_path.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // -singlefile drops the page-number suffix pdftoppm would otherwise pad
        let image_path = image_prefix.with_extension("png");
        if !image_path.is_file() {
            return Err(RenderError::MissingOutput {
                path: pdf_path.to_path_buf(),
            });
        }

        Ok(PageImage::in_temp_dir(image_path, temp_dir))
    }
}
