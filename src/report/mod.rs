//! Report rendering for aiux.
//!
//! Turns the canonical artifacts of a run into human-readable files under
//! `reports/`. `report.json` is only ever read here, never written.

pub mod markdown;
pub mod pdf;
pub mod view;

pub use markdown::{MarkdownOutputError, MarkdownReportWriter};
pub use pdf::{PdfOutputError, PdfReportWriter, PLACEHOLDER_PDF};
pub use view::{FindingView, ReportView};

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::audit::AuditResult;
use crate::layout::RunLayout;

/// A requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Canonical JSON. Already written by `audit`, so rendering skips it.
    Json,
    /// Accepted for symmetry with `metrics.csv`; renders nothing.
    Csv,
    /// Markdown summary, `report.md`
    Md,
    /// Placeholder PDF, `report.pdf`
    Pdf,
}

impl ReportFormat {
    /// Parse a single token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "md" => Some(ReportFormat::Md),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }

    /// Parse a comma-separated list such as `"md, pdf"`.
    ///
    /// Tokens are trimmed and empty tokens dropped. Unrecognized tokens are
    /// ignored.
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let format = Self::from_token(token);
                if format.is_none() {
                    debug!(token, "Ignoring unknown report format");
                }
                format
            })
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Md => "md",
            ReportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Files written by a render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReports {
    pub markdown: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
}

impl RenderedReports {
    /// Paths written, in render order.
    pub fn written(&self) -> Vec<&Path> {
        [self.markdown.as_deref(), self.pdf.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Render the requested formats for the run at `run_dir`.
///
/// `reports/` is created if missing. When `report.json` is absent a
/// placeholder report is rendered instead.
pub fn render_reports(run_dir: &Path, formats: &[ReportFormat]) -> AuditResult<RenderedReports> {
    let layout = RunLayout::new(run_dir);
    layout.ensure_reports_dir()?;

    let report_json = layout.report_json();
    let view = ReportView::load_or_placeholder(&report_json)?;
    debug!(
        run_dir = %run_dir.display(),
        found = report_json.exists(),
        project = %view.project(),
        "Loaded report for rendering"
    );

    let mut rendered = RenderedReports::default();

    if formats.contains(&ReportFormat::Md) {
        let path = layout.report_md();
        MarkdownReportWriter::write_to_file(&view, &path)?;
        info!(path = %path.display(), "Wrote markdown report");
        rendered.markdown = Some(path);
    }

    if formats.contains(&ReportFormat::Json) {
        debug!("Canonical report.json is written by audit, nothing to render");
    }

    if formats.contains(&ReportFormat::Csv) {
        debug!("No CSV rendering is defined, skipping");
    }

    if formats.contains(&ReportFormat::Pdf) {
        let path = layout.report_pdf();
        PdfReportWriter::write_to_file(&path)?;
        info!(path = %path.display(), "Wrote placeholder PDF");
        rendered.pdf = Some(path);
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{run_audit, AuditError, AuditRequest};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            ReportFormat::parse_list("md, pdf"),
            vec![ReportFormat::Md, ReportFormat::Pdf]
        );
        assert_eq!(
            ReportFormat::parse_list(" json ,,csv,"),
            vec![ReportFormat::Json, ReportFormat::Csv]
        );
        assert!(ReportFormat::parse_list("").is_empty());
    }

    #[test]
    fn test_parse_list_is_case_sensitive_and_ignores_unknown() {
        assert_eq!(
            ReportFormat::parse_list("MD,html,pdf"),
            vec![ReportFormat::Pdf]
        );
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Md.to_string(), "md");
        assert_eq!(
            ReportFormat::from_token(ReportFormat::Pdf.as_str()),
            Some(ReportFormat::Pdf)
        );
    }

    #[test]
    fn test_render_without_report_json() {
        let temp_dir = TempDir::new().unwrap();

        let rendered = render_reports(temp_dir.path(), &[ReportFormat::Md]).unwrap();

        let md_path = rendered.markdown.unwrap();
        let content = fs::read_to_string(md_path).unwrap();
        assert!(content.starts_with("# Audit Report — unknown\n"));
        assert!(content.contains("\n- None\n"));
        assert!(!temp_dir.path().join("reports").join("report.json").exists());
    }

    #[test]
    fn test_render_creates_missing_run_dir() {
        let temp_dir = TempDir::new().unwrap();
        let run_dir = temp_dir.path().join("fresh");

        render_reports(&run_dir, &[ReportFormat::Pdf]).unwrap();

        assert!(run_dir.join("reports").join("report.pdf").exists());
    }

    #[test]
    fn test_render_md_and_pdf_after_audit() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("proj.yaml");
        fs::write(&config, "standard: wcag-2.2\n").unwrap();
        let run_dir = temp_dir.path().join("run1");
        run_audit(&AuditRequest::new(&config, &run_dir)).unwrap();

        let rendered =
            render_reports(&run_dir, &[ReportFormat::Md, ReportFormat::Pdf]).unwrap();

        assert_eq!(rendered.written().len(), 2);
        let md = fs::read_to_string(run_dir.join("reports").join("report.md")).unwrap();
        assert!(md.lines().any(|line| line == "# Audit Report — proj"));
        assert!(md.contains("- **DEMO-001** [minor / wcag] — "));
        let pdf = fs::read(run_dir.join("reports").join("report.pdf")).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("proj.toml");
        fs::write(&config, "standard = \"wcag-2.2\"\n").unwrap();
        let run_dir = temp_dir.path().join("run");
        run_audit(&AuditRequest::new(&config, &run_dir)).unwrap();

        render_reports(&run_dir, &[ReportFormat::Md]).unwrap();
        let first = fs::read(run_dir.join("reports").join("report.md")).unwrap();
        render_reports(&run_dir, &[ReportFormat::Md]).unwrap();
        let second = fs::read(run_dir.join("reports").join("report.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_and_csv_render_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let rendered =
            render_reports(temp_dir.path(), &[ReportFormat::Json, ReportFormat::Csv]).unwrap();

        assert!(rendered.written().is_empty());
        let reports = temp_dir.path().join("reports");
        assert!(reports.is_dir());
        assert_eq!(fs::read_dir(&reports).unwrap().count(), 0);
    }

    #[test]
    fn test_json_format_never_rewrites_report() {
        let temp_dir = TempDir::new().unwrap();
        let reports = temp_dir.path().join("reports");
        fs::create_dir_all(&reports).unwrap();
        let original = r#"{"project": "kept", "findings": []}"#;
        fs::write(reports.join("report.json"), original).unwrap();

        render_reports(temp_dir.path(), &[ReportFormat::Json, ReportFormat::Md]).unwrap();

        assert_eq!(
            fs::read_to_string(reports.join("report.json")).unwrap(),
            original
        );
        let md = fs::read_to_string(reports.join("report.md")).unwrap();
        assert!(md.starts_with("# Audit Report — kept\nRun: n/a\n"));
    }

    #[test]
    fn test_malformed_report_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let reports = temp_dir.path().join("reports");
        fs::create_dir_all(&reports).unwrap();
        fs::write(reports.join("report.json"), "[1, 2").unwrap();

        let err = render_reports(temp_dir.path(), &[ReportFormat::Md]).unwrap_err();

        assert!(matches!(err, AuditError::MalformedReport { .. }));
        assert!(!reports.join("report.md").exists());
    }
}
