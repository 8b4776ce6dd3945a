//! JSON output for the canonical run documents.
//!
//! `report.json` and `provenance.json` are both written through
//! [`JsonReportWriter`] as pretty-printed JSON with two-space indentation
//! and no trailing newline.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during JSON output operations.
#[derive(Error, Debug)]
pub enum JsonOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for JSON output operations.
pub type JsonOutputResult<T> = Result<T, JsonOutputError>;

/// Writer for JSON-formatted run documents.
pub struct JsonReportWriter;

impl JsonReportWriter {
    /// Write a document to a JSON file, replacing any existing file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aiux::audit::{JsonReportWriter, Provenance};
    ///
    /// let provenance = Provenance::new(Path::new("proj.yaml"));
    /// JsonReportWriter::write_to_file(&provenance, "provenance.json").unwrap();
    /// ```
    pub fn write_to_file<T, P>(document: &T, path: P) -> JsonOutputResult<()>
    where
        T: Serialize + ?Sized,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let json = Self::to_json_string(document)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a document to a pretty JSON string.
    pub fn to_json_string<T: Serialize + ?Sized>(document: &T) -> JsonOutputResult<String> {
        let json = serde_json::to_string_pretty(document)?;
        Ok(json)
    }
}
