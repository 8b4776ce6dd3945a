//! End-to-end tests for the audit and report pipeline through the library API.

use aiux::audit::{run_audit, AuditReport, AuditRequest, Provenance};
use aiux::report::{render_reports, ReportFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Run an audit with a `proj.yaml` config into `<tmp>/run1`.
fn audit_fixture(temp_dir: &Path) -> (PathBuf, PathBuf) {
    let config = temp_dir.join("proj.yaml");
    fs::write(&config, "standard: wcag-2.2\n").expect("Failed to write config");
    let run_dir = temp_dir.join("run1");
    run_audit(&AuditRequest::new(&config, &run_dir)).expect("Audit should succeed");
    (config, run_dir)
}

// ============================================================================
// Canonical artifacts
// ============================================================================

#[test]
fn test_report_json_has_single_demo_finding() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    let content = fs::read_to_string(run_dir.join("reports/report.json")).unwrap();
    let report: AuditReport = serde_json::from_str(&content).unwrap();

    assert_eq!(report.project, "proj");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].id, "DEMO-001");
    assert!(report.findings[0].evidence.is_empty());
    assert!(report.findings[0].locations.is_empty());
    assert!(report.clusters.is_empty());
    assert!(report.metrics.sus.is_none());
    assert!(report.metrics.nasa_tlx.is_none());
    assert!(report.metrics.time_on_task_ms.is_none());
    assert!(report.metrics.completion_rate.is_none());
    assert!(report.metrics.error_rate.is_none());
}

#[test]
fn test_report_json_timestamp_is_utc() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    let content = fs::read_to_string(run_dir.join("reports/report.json")).unwrap();
    let report: AuditReport = serde_json::from_str(&content).unwrap();

    assert!(report.timestamp.ends_with('Z'));
    let parsed = chrono::DateTime::parse_from_rfc3339(&report.timestamp)
        .expect("timestamp should be RFC 3339");
    let run_seconds: i64 = report.run_id.trim_start_matches("run-").parse().unwrap();
    assert_eq!(parsed.timestamp(), run_seconds);
}

#[test]
fn test_metrics_csv_has_five_lines_with_empty_values() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    let content = fs::read_to_string(run_dir.join("reports/metrics.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines,
        vec![
            "metric,value",
            "sus,",
            "time_on_task_ms,",
            "completion_rate,",
            "error_rate,"
        ]
    );
}

#[test]
fn test_provenance_records_config_and_version() {
    let temp_dir = TempDir::new().unwrap();
    let (config, run_dir) = audit_fixture(temp_dir.path());

    let content = fs::read_to_string(run_dir.join("reports/provenance.json")).unwrap();
    let provenance: Provenance = serde_json::from_str(&content).unwrap();

    assert_eq!(provenance.config, config.to_string_lossy());
    assert_eq!(provenance.version, "0.0.1");
}

#[test]
fn test_rerun_overwrites_canonical_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let (config, run_dir) = audit_fixture(temp_dir.path());
    fs::write(run_dir.join("reports/metrics.csv"), "garbage").unwrap();

    run_audit(&AuditRequest::new(&config, &run_dir)).unwrap();

    let content = fs::read_to_string(run_dir.join("reports/metrics.csv")).unwrap();
    assert!(content.starts_with("metric,value"));
}

#[test]
fn test_evidence_dir_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    assert_eq!(fs::read_dir(run_dir.join("evidence")).unwrap().count(), 0);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_markdown_from_audit() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    render_reports(&run_dir, &ReportFormat::parse_list("md")).unwrap();

    let md = fs::read_to_string(run_dir.join("reports/report.md")).unwrap();
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], "# Audit Report — proj");
    assert!(lines[1].starts_with("Run: run-"));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "## Findings");
    assert_eq!(
        lines[4],
        "- **DEMO-001** [minor / wcag] — Demo finding: placeholder contrast check"
    );
    assert_eq!(lines[6], "## Metrics");
    assert_eq!(lines[7], "- sus: None");
    assert_eq!(lines[11], "- error_rate: None");
    assert_eq!(lines.len(), 12);
}

#[test]
fn test_render_pdf_only() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());

    let rendered = render_reports(&run_dir, &ReportFormat::parse_list("pdf")).unwrap();

    assert!(rendered.markdown.is_none());
    assert!(!run_dir.join("reports/report.md").exists());
    let pdf = fs::read(run_dir.join("reports/report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-1.4"));
}

#[test]
fn test_render_does_not_touch_canonical_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());
    let before = fs::read(run_dir.join("reports/report.json")).unwrap();

    render_reports(&run_dir, &ReportFormat::parse_list("json,csv,md,pdf")).unwrap();

    let after = fs::read(run_dir.join("reports/report.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_render_overwrites_existing_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let (_, run_dir) = audit_fixture(temp_dir.path());
    fs::write(run_dir.join("reports/report.md"), "stale").unwrap();

    render_reports(&run_dir, &[ReportFormat::Md]).unwrap();

    let md = fs::read_to_string(run_dir.join("reports/report.md")).unwrap();
    assert!(md.starts_with("# Audit Report — proj"));
}
