//! Pre-flight validation.
//!
//! All checks run over the entire record set before any copy. Violations
//! are collected exhaustively and reported together; a single violation
//! aborts the whole run, so no partial output tree is ever produced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One validation failure, tied to its input row.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The resolved source path does not exist (or is not a file).
    MissingSource { row: usize, path: PathBuf },
    /// The extension maps to no known media type.
    UnrecognizedExtension { row: usize, file: String },
    /// Every hierarchy level is blank; the assembled name would be empty.
    DegenerateName { row: usize, file: String },
    /// Two records plan the identical destination path. The original
    /// silently overwrote in this case; here it is an error.
    DestinationCollision {
        row: usize,
        first_row: usize,
        path: PathBuf,
    },
}

impl Violation {
    /// Heading the violation is grouped under in the consolidated report.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Violation::MissingSource { .. } => "missing source files",
            Violation::UnrecognizedExtension { .. } => "unrecognized extensions",
            Violation::DegenerateName { .. } => "degenerate names (all levels blank)",
            Violation::DestinationCollision { .. } => "destination collisions",
        }
    }

    /// One report line for this violation.
    pub fn detail(&self) -> String {
        match self {
            Violation::MissingSource { row, path } => {
                format!("{} (row {row})", path.display())
            }
            Violation::UnrecognizedExtension { row, file } => {
                format!("{file} (row {row})")
            }
            Violation::DegenerateName { row, file } => {
                format!("{file} (row {row})")
            }
            Violation::DestinationCollision {
                row,
                first_row,
                path,
            } => {
                format!("{} (rows {first_row} and {row})", path.display())
            }
        }
    }

    /// Input row this violation belongs to.
    pub fn row(&self) -> usize {
        match self {
            Violation::MissingSource { row, .. }
            | Violation::UnrecognizedExtension { row, .. }
            | Violation::DegenerateName { row, .. }
            | Violation::DestinationCollision { row, .. } => *row,
        }
    }
}

/// The consolidated result of all validation passes.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn extend(&mut self, more: Vec<Violation>) {
        self.violations.extend(more);
    }

    /// Report lines grouped under their failure kind, rows in input order
    /// within each group.
    pub fn grouped(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut ordered: Vec<&Violation> = self.violations.iter().collect();
        ordered.sort_by_key(|violation| violation.row());
        let mut groups: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for violation in ordered {
            groups
                .entry(violation.kind_label())
                .or_default()
                .push(violation.detail());
        }
        groups
    }
}

/// Existence check: every referenced source must exist as a file under the
/// input directory. Collects every failing path, never stops at the first.
pub fn check_sources<'a, I>(entries: I, input_dir: &Path) -> Vec<Violation>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut violations = Vec::new();
    for (row, name) in entries {
        let path = input_dir.join(name);
        if !path.is_file() {
            violations.push(Violation::MissingSource { row, path });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_sources_collects_every_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("present.jpg"), b"x").unwrap();

        let entries = vec![
            (1, "present.jpg"),
            (2, "gone.jpg"),
            (3, "also-gone.mp4"),
        ];
        let violations = check_sources(entries, dir.path());

        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .all(|violation| matches!(violation, Violation::MissingSource { .. })));
        assert_eq!(violations[0].row(), 2);
        assert_eq!(violations[1].row(), 3);
    }

    #[test]
    fn test_a_directory_is_not_a_usable_source() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a.jpg")).unwrap();

        let violations = check_sources(vec![(1, "a.jpg")], dir.path());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_grouped_report_orders_rows_within_kind() {
        let mut report = ValidationReport::default();
        report.extend(vec![
            Violation::UnrecognizedExtension {
                row: 5,
                file: "b.wmv".to_string(),
            },
            Violation::MissingSource {
                row: 2,
                path: PathBuf::from("in/a.jpg"),
            },
            Violation::UnrecognizedExtension {
                row: 3,
                file: "a.tiff".to_string(),
            },
        ]);

        let grouped = report.grouped();
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped.get("unrecognized extensions").unwrap(),
            &vec!["a.tiff (row 3)".to_string(), "b.wmv (row 5)".to_string()]
        );
    }
}
