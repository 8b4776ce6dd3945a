//! aiux - UX and accessibility audit scaffold
//!
//! The `audit` command writes the canonical artifacts of a run; the `report`
//! command renders them. This library exposes both for integration testing
//! and embedding.

pub mod audit;
pub mod layout;
pub mod logging;
pub mod report;
pub mod ui;

pub use audit::{run_audit, AuditError, AuditRequest, AuditResult};
pub use report::{render_reports, ReportFormat};
