//! Shared driver types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use shelver_plan::ValidationReport;

/// Which rule variant the CSV follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// book/unit/section/... hierarchy columns; names are assembled.
    Hierarchy,
    /// A free-form suffix appended to the original stem.
    Suffix,
}

/// Everything a run needs, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub csv: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: Mode,
    /// Validate and plan without touching the output tree.
    pub dry_run: bool,
    /// Write the date-stamped audit CSV (hierarchy mode only).
    pub write_audit: bool,
    /// Also write the violation report as JSON.
    pub report_json: Option<PathBuf>,
}

/// Outcome of one run.
#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    /// Data rows read from the CSV.
    pub rows: usize,
    /// Files actually copied.
    pub copied: usize,
    /// Copy counts keyed by media-type label (or extension in suffix mode).
    pub by_type: BTreeMap<String, usize>,
    pub audit_path: Option<PathBuf>,
    pub report: ValidationReport,
    pub dry_run: bool,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.report.is_clean()
    }
}
