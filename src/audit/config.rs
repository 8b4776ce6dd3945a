//! Audit configuration inspection.
//!
//! The `--config` document names the project through its file stem. Its
//! contents are inspected for logging only: a document that cannot be read
//! as a keyed YAML, TOML or JSON map is reported as a warning and the audit
//! carries on.

use config::{Config, File, FileFormat, Map, Source, Value};
use std::path::Path;
use tracing::warn;

/// Top-level view of an audit configuration document.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// Top-level entries of the document. Empty when it was not parsed.
    entries: Map<String, Value>,
}

impl AuditConfig {
    /// Inspect the configuration at `path`. Never fails.
    pub fn inspect<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let Some(format) = Self::detect_format(path) else {
            warn!(
                config = %path.display(),
                "Unrecognized configuration format, skipping parse"
            );
            return Self::default();
        };

        let parsed = Config::builder()
            .add_source(File::from(path).format(format).required(true))
            .build()
            .and_then(|config| config.collect());

        match parsed {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!(
                    config = %path.display(),
                    error = %e,
                    "Configuration is not a keyed document, continuing without it"
                );
                Self::default()
            }
        }
    }

    /// Map a file extension to a parser. Matching is case-insensitive.
    fn detect_format(path: &Path) -> Option<FileFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    /// Sorted top-level keys of the document.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
