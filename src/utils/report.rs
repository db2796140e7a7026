//! Serializable summary of one compile invocation.
//!
//! The report is an optional JSON artifact the CLI can persist next to the
//! generated markup; it never feeds back into compilation.

use serde::Serialize;

use crate::core::wce2html::CompileWarning;

/// Which marker-delimited regions were present (non-empty after trimming).
#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub style: bool,
    pub markup: bool,
    pub script: bool,
    pub ui: bool,
}

/// One rendered warning.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub kind: String,
    pub message: String,
    pub location: Option<String>,
}

impl From<&CompileWarning> for ReportEntry {
    fn from(warning: &CompileWarning) -> Self {
        ReportEntry {
            kind: warning.kind.to_string(),
            message: warning.message.clone(),
            location: warning.location.clone(),
        }
    }
}

/// Summary of one compile invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    pub regions: RegionSummary,
    /// Number of container nodes in the parsed tree.
    pub containers: usize,
    /// Number of leaf nodes in the parsed tree.
    pub leaves: usize,
    pub warnings: Vec<ReportEntry>,
}
