//! Placeholder PDF output.
//!
//! No PDF rendering exists yet. The writer emits a fixed stub carrying a
//! valid PDF header so downstream tooling can detect the file type.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Contents of every `report.pdf`.
pub const PLACEHOLDER_PDF: &[u8] = b"%PDF-1.4\n% placeholder PDF\n";

/// Errors that can occur during PDF output operations.
#[derive(Error, Debug)]
pub enum PdfOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writer for the placeholder PDF.
pub struct PdfReportWriter;

impl PdfReportWriter {
    /// Write the placeholder PDF to `path`, replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(path: P) -> Result<(), PdfOutputError> {
        fs::write(path, PLACEHOLDER_PDF)?;
        Ok(())
    }
}
