//! Batch number extraction from recognized page text.

use serde::Serialize;
use std::fmt;

/// Label printed in front of the batch number on the first page.
pub const BATCH_NUMBER_MARKER: &str = "Batch number:";

/// A batch number read from a document.
///
/// Always trimmed, never empty, and never spans more than one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchIdentifier(String);

impl BatchIdentifier {
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.contains(['\n', '\r']) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name this batch number maps to, e.g. `778899.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.0)
    }

    /// Case-insensitive comparison against an existing file name.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        file_name.to_lowercase() == self.file_name().to_lowercase()
    }
}

impl fmt::Display for BatchIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the batch number in OCR output.
///
/// Only the first `Batch number:` marker counts, and it must be followed by
/// a line break. A marker at the very start of the text is ignored.
pub fn extract_batch_number(text: &str) -> Option<BatchIdentifier> {
    let start = text.find(BATCH_NUMBER_MARKER)?;
    if start == 0 {
        return None;
    }

    let value_start = start + BATCH_NUMBER_MARKER.len();
    let line_len = text[value_start..].find('\n')?;

    BatchIdentifier::new(&text[value_start..value_start + line_len])
}
