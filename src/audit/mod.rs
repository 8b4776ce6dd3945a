//! Audit runner for aiux.
//!
//! This module owns the canonical data model of a run and produces the
//! canonical artifacts:
//! - `reports/report.json` - the structured audit report
//! - `reports/metrics.csv` - metric/value pairs
//! - `reports/provenance.json` - which configuration produced the run
//!
//! The audit itself is a placeholder: every run records the same demo
//! finding with null metrics and no clusters.

pub mod config;
pub mod output;

pub use self::config::AuditConfig;
pub use self::output::{JsonOutputError, JsonReportWriter, MetricsCsvWriter, MetricsOutputError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::layout::RunLayout;
use crate::report::{MarkdownOutputError, PdfOutputError};

/// Version recorded in `provenance.json`.
pub const AUDIT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can occur during audit and report operations
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Malformed report {}: {source}", .path.display())]
    MalformedReport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] JsonOutputError),

    #[error(transparent)]
    Metrics(#[from] MetricsOutputError),

    #[error(transparent)]
    Markdown(#[from] MarkdownOutputError),

    #[error(transparent)]
    Pdf(#[from] PdfOutputError),
}

/// Result type for audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// A single reported issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier (e.g., "DEMO-001")
    pub id: String,
    /// Category (e.g., "wcag")
    pub category: String,
    /// Severity label (e.g., "minor")
    pub severity: String,
    /// Human-readable description
    pub description: String,
    /// Evidence reference, empty until evidence capture exists
    pub evidence: String,
    /// Locations in the audited product
    pub locations: Vec<String>,
    /// Accessibility standard references (e.g., "WCAG 2.2 1.4.3")
    pub standard_refs: Vec<String>,
    /// Suggested remediation
    pub remediation: String,
}

impl Finding {
    /// The placeholder contrast finding every run reports.
    pub fn demo() -> Self {
        Self {
            id: "DEMO-001".to_string(),
            category: "wcag".to_string(),
            severity: "minor".to_string(),
            description: "Demo finding: placeholder contrast check".to_string(),
            evidence: String::new(),
            locations: Vec::new(),
            standard_refs: vec!["WCAG 2.2 1.4.3".to_string()],
            remediation: "Run real checks once implemented.".to_string(),
        }
    }
}

/// Usability metrics. Every field is null until real measurement exists.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// System Usability Scale score
    pub sus: Option<f64>,
    /// NASA Task Load Index
    pub nasa_tlx: Option<f64>,
    pub time_on_task_ms: Option<f64>,
    pub completion_rate: Option<f64>,
    pub error_rate: Option<f64>,
}

impl Metrics {
    /// Rows written to `metrics.csv`, in file order.
    ///
    /// NASA-TLX is reported in JSON only.
    pub fn csv_rows(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("sus", self.sus),
            ("time_on_task_ms", self.time_on_task_ms),
            ("completion_rate", self.completion_rate),
            ("error_rate", self.error_rate),
        ]
    }
}

/// Inputs recorded in the report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditInputs {
    /// DOM snapshot path, if one was supplied
    pub dom: Option<String>,
    /// Screenshot files consumed (none yet)
    pub screenshots: Vec<String>,
    /// Survey CSV path, if one was supplied
    pub surveys: Option<String>,
    /// Transcript files consumed (none yet)
    pub transcripts: Vec<String>,
}

/// A cluster of related findings. No clustering exists yet, so reports
/// always carry an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub finding_ids: Vec<String>,
}

/// Complete audit report, the canonical `report.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Project name, taken from the configuration file stem
    pub project: String,
    /// Run identifier, `run-<unix seconds>`
    pub run_id: String,
    /// UTC timestamp of the run
    pub timestamp: String,
    pub inputs: AuditInputs,
    pub findings: Vec<Finding>,
    pub metrics: Metrics,
    pub clusters: Vec<Cluster>,
}

impl AuditReport {
    /// Build the report for a run started at `now`.
    pub fn new(project: impl Into<String>, inputs: AuditInputs, now: DateTime<Utc>) -> Self {
        Self {
            project: project.into(),
            run_id: format!("run-{}", now.timestamp()),
            timestamp: now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            inputs,
            findings: vec![Finding::demo()],
            metrics: Metrics::default(),
            clusters: Vec::new(),
        }
    }
}

/// Provenance record written next to the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Configuration path as given on the command line
    pub config: String,
    /// Version of the tool that produced the run
    pub version: String,
}

impl Provenance {
    pub fn new(config_path: &Path) -> Self {
        Self {
            config: config_path.to_string_lossy().into_owned(),
            version: AUDIT_VERSION.to_string(),
        }
    }
}

/// Everything `run_audit` needs. Only `config` and `out_dir` are required.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub dom: Option<PathBuf>,
    pub screenshots: Option<PathBuf>,
    pub surveys: Option<PathBuf>,
    pub transcripts: Option<PathBuf>,
    pub config: PathBuf,
    pub out_dir: PathBuf,
}

impl AuditRequest {
    pub fn new(config: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            dom: None,
            screenshots: None,
            surveys: None,
            transcripts: None,
            config: config.into(),
            out_dir: out_dir.into(),
        }
    }

    pub fn with_dom(mut self, path: impl Into<PathBuf>) -> Self {
        self.dom = Some(path.into());
        self
    }

    pub fn with_screenshots(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshots = Some(path.into());
        self
    }

    pub fn with_surveys(mut self, path: impl Into<PathBuf>) -> Self {
        self.surveys = Some(path.into());
        self
    }

    pub fn with_transcripts(mut self, path: impl Into<PathBuf>) -> Self {
        self.transcripts = Some(path.into());
        self
    }

    /// Project name derived from the configuration file's stem.
    pub fn project_name(&self) -> String {
        self.config
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Fail on the first supplied path that does not exist.
    fn validate(&self) -> AuditResult<()> {
        let supplied = [
            self.dom.as_deref(),
            self.screenshots.as_deref(),
            self.surveys.as_deref(),
            self.transcripts.as_deref(),
            Some(self.config.as_path()),
        ];
        for path in supplied.into_iter().flatten() {
            if !path.exists() {
                return Err(AuditError::PathNotFound(path.to_path_buf()));
            }
        }
        Ok(())
    }

    fn recorded_inputs(&self) -> AuditInputs {
        AuditInputs {
            dom: self
                .dom
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            screenshots: Vec::new(),
            surveys: self
                .surveys
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            transcripts: Vec::new(),
        }
    }
}

/// What a completed audit wrote
#[derive(Debug, Clone)]
pub struct AuditArtifacts {
    pub report: AuditReport,
    pub report_json: PathBuf,
    pub metrics_csv: PathBuf,
    pub provenance_json: PathBuf,
}

/// Run an audit and write the canonical artifacts under `request.out_dir`.
///
/// Input paths are checked before anything is created, so a failed
/// validation leaves the filesystem untouched.
pub fn run_audit(request: &AuditRequest) -> AuditResult<AuditArtifacts> {
    request.validate()?;

    let config = AuditConfig::inspect(&request.config);
    debug!(
        config = %request.config.display(),
        keys = ?config.keys(),
        "Inspected audit configuration"
    );

    let layout = RunLayout::new(&request.out_dir);
    layout.ensure_dirs()?;

    let report = AuditReport::new(request.project_name(), request.recorded_inputs(), Utc::now());
    info!(project = %report.project, run_id = %report.run_id, "Starting audit run");

    let report_json = layout.report_json();
    JsonReportWriter::write_to_file(&report, &report_json)?;
    info!(path = %report_json.display(), "Wrote report");

    let metrics_csv = layout.metrics_csv();
    MetricsCsvWriter::write_to_file(&report.metrics, &metrics_csv)?;
    info!(path = %metrics_csv.display(), "Wrote metrics");

    let provenance_json = layout.provenance_json();
    JsonReportWriter::write_to_file(&Provenance::new(&request.config), &provenance_json)?;
    info!(path = %provenance_json.display(), "Wrote provenance");

    Ok(AuditArtifacts {
        report,
        report_json,
        metrics_csv,
        provenance_json,
    })
}
