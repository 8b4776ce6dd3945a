//! CSV output for run metrics.
//!
//! `metrics.csv` is a two-column `metric,value` table. Missing values are
//! written as empty cells. Records are CRLF terminated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::audit::Metrics;

const HEADER: [&str; 2] = ["metric", "value"];
const RECORD_TERMINATOR: &str = "\r\n";

/// Errors that can occur during metrics output operations.
#[derive(Error, Debug)]
pub enum MetricsOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for metrics output operations.
pub type MetricsOutputResult<T> = Result<T, MetricsOutputError>;

/// Writer for `metrics.csv`.
pub struct MetricsCsvWriter;

impl MetricsCsvWriter {
    /// Write metrics to a CSV file, replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(metrics: &Metrics, path: P) -> MetricsOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::to_csv_string(metrics).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Format metrics as CSV text, header first.
    pub fn to_csv_string(metrics: &Metrics) -> String {
        let mut output = String::new();
        Self::push_record(&mut output, HEADER[0], HEADER[1]);
        for (name, value) in metrics.csv_rows() {
            let cell = value.map(|v| v.to_string()).unwrap_or_default();
            Self::push_record(&mut output, name, &cell);
        }
        output
    }

    fn push_record(output: &mut String, metric: &str, value: &str) {
        output.push_str(metric);
        output.push(',');
        output.push_str(value);
        output.push_str(RECORD_TERMINATOR);
    }
}
