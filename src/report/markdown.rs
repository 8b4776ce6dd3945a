//! Markdown output format for audit reports.
//!
//! This module provides markdown formatting for audit reports,
//! enabling human-readable documentation output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use super::view::{format_value, FindingView, ReportView};

/// Errors that can occur during markdown output operations.
#[derive(Error, Debug)]
pub enum MarkdownOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for markdown output operations.
pub type MarkdownOutputResult<T> = Result<T, MarkdownOutputError>;

/// Writer for markdown-formatted audit reports.
pub struct MarkdownReportWriter;

impl MarkdownReportWriter {
    /// Write a report to a markdown file, replacing any existing file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aiux::report::{MarkdownReportWriter, ReportView};
    ///
    /// let view = ReportView::placeholder();
    /// MarkdownReportWriter::write_to_file(&view, "report.md").unwrap();
    /// ```
    pub fn write_to_file<P: AsRef<Path>>(report: &ReportView, path: P) -> MarkdownOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let markdown = Self::to_markdown_string(report);
        writer.write_all(markdown.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Format a report as a markdown string.
    ///
    /// Lines are joined with `\n`; the document has no trailing newline.
    pub fn to_markdown_string(report: &ReportView) -> String {
        let mut lines = Vec::new();

        lines.push(format!("# Audit Report — {}", report.project()));
        lines.push(format!("Run: {}", report.run_id()));

        lines.push("\n## Findings".to_string());
        if report.findings().is_empty() {
            lines.push("- None".to_string());
        } else {
            lines.extend(report.findings().iter().map(Self::format_finding));
        }

        lines.push("\n## Metrics".to_string());
        lines.extend(
            report
                .metrics()
                .map(|(name, value)| format!("- {}: {}", name, format_value(value))),
        );

        lines.join("\n")
    }

    /// Format a single finding as a list item.
    fn format_finding(finding: &FindingView) -> String {
        format!(
            "- **{}** [{} / {}] — {}",
            format_value(&finding.id),
            format_value(&finding.severity),
            format_value(&finding.category),
            format_value(&finding.description)
        )
    }
}
