//! Read-side view of `report.json`.
//!
//! Rendering is lenient: it only needs a handful of fields, so a report
//! written by an older or newer tool still renders as long as each finding
//! carries its id, severity, category and description.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::audit::{AuditError, AuditResult};

/// Placeholder for a missing project or run id in a synthesized report.
const UNKNOWN: &str = "unknown";

/// Shown when a report on disk carries no run id.
const MISSING_RUN_ID: &str = "n/a";

fn unknown_project() -> Value {
    Value::String(UNKNOWN.to_string())
}

fn missing_run_id() -> Value {
    Value::String(MISSING_RUN_ID.to_string())
}

/// Format a report value for display.
///
/// Strings render raw, `null` renders as `None` and booleans as
/// `True`/`False`, matching reports produced by earlier tooling. Anything
/// else renders as JSON text.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The fields of a finding that rendering needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FindingView {
    pub id: Value,
    pub severity: Value,
    pub category: Value,
    pub description: Value,
}

/// The fields of a report that rendering needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportView {
    #[serde(default = "unknown_project")]
    project: Value,
    #[serde(default = "missing_run_id")]
    run_id: Value,
    #[serde(default)]
    findings: Option<Vec<FindingView>>,
    /// Metric name to value, in document order.
    #[serde(default)]
    metrics: Option<Map<String, Value>>,
}

impl ReportView {
    /// The record rendered when a run has no `report.json`.
    pub fn placeholder() -> Self {
        Self {
            project: unknown_project(),
            run_id: Value::String(UNKNOWN.to_string()),
            findings: Some(Vec::new()),
            metrics: Some(Map::new()),
        }
    }

    /// Parse a report document.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load `path`, or fall back to [`ReportView::placeholder`] if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::MalformedReport` if the file exists but is not
    /// a valid report document.
    pub fn load_or_placeholder(path: &Path) -> AuditResult<Self> {
        if !path.exists() {
            return Ok(Self::placeholder());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|source| AuditError::MalformedReport {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn project(&self) -> String {
        format_value(&self.project)
    }

    pub fn run_id(&self) -> String {
        format_value(&self.run_id)
    }

    pub fn findings(&self) -> &[FindingView] {
        self.findings.as_deref().unwrap_or_default()
    }

    /// Metrics in document order.
    pub fn metrics(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.metrics
            .iter()
            .flat_map(|m| m.iter())
            .map(|(k, v)| (k.as_str(), v))
    }
}
