//! On-disk layout of a run directory.
//!
//! Every artifact name written by `audit` or read by `report` lives here so
//! the two commands cannot drift apart.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory holding the canonical and rendered artifacts.
const REPORTS_DIR_NAME: &str = "reports";

/// Directory reserved for captured evidence. Always empty for now.
const EVIDENCE_DIR_NAME: &str = "evidence";

const REPORT_JSON_FILE_NAME: &str = "report.json";
const METRICS_CSV_FILE_NAME: &str = "metrics.csv";
const PROVENANCE_FILE_NAME: &str = "provenance.json";
const REPORT_MD_FILE_NAME: &str = "report.md";
const REPORT_PDF_FILE_NAME: &str = "report.pdf";

/// Paths inside a single run directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    root: PathBuf,
}

impl RunLayout {
    /// Create a layout rooted at `root`. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join(REPORTS_DIR_NAME)
    }

    pub fn evidence_dir(&self) -> PathBuf {
        self.root.join(EVIDENCE_DIR_NAME)
    }

    pub fn report_json(&self) -> PathBuf {
        self.reports_dir().join(REPORT_JSON_FILE_NAME)
    }

    pub fn metrics_csv(&self) -> PathBuf {
        self.reports_dir().join(METRICS_CSV_FILE_NAME)
    }

    pub fn provenance_json(&self) -> PathBuf {
        self.reports_dir().join(PROVENANCE_FILE_NAME)
    }

    pub fn report_md(&self) -> PathBuf {
        self.reports_dir().join(REPORT_MD_FILE_NAME)
    }

    pub fn report_pdf(&self) -> PathBuf {
        self.reports_dir().join(REPORT_PDF_FILE_NAME)
    }

    /// Create `reports/` and `evidence/`, including any missing parents.
    ///
    /// Calling this on an existing run directory is a no-op.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(self.reports_dir())?;
        fs::create_dir_all(self.evidence_dir())?;
        Ok(())
    }

    /// Create only `reports/`. Used by the renderer, which never needs
    /// the evidence directory.
    pub fn ensure_reports_dir(&self) -> io::Result<()> {
        fs::create_dir_all(self.reports_dir())
    }
}
