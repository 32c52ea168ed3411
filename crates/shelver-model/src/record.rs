//! Records describing one file to rename and copy.

use std::fmt;
use std::path::Path;

use crate::field::Field;

/// The fixed classification levels, in rule order.
///
/// Trailing blank levels are dropped from assembled names; interior blanks
/// become a literal `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    pub book: Field,
    pub unit: Field,
    pub section: Field,
    pub subsection: Field,
    pub task: Field,
    pub activity_step: Field,
    pub question: Field,
}

impl Hierarchy {
    /// The levels in rule order.
    pub fn levels(&self) -> [&Field; 7] {
        [
            &self.book,
            &self.unit,
            &self.section,
            &self.subsection,
            &self.task,
            &self.activity_step,
            &self.question,
        ]
    }

    /// True when every level is blank. Such a record cannot produce a
    /// usable name and must be rejected.
    pub fn is_degenerate(&self) -> bool {
        self.levels().iter().all(|field| field.is_blank())
    }
}

/// One logical file from the rename CSV.
///
/// `source_name` is the trimmed filename cell, kept verbatim otherwise so it
/// stays usable as a filesystem path. `cells` holds the raw original row for
/// the audit writer.
#[derive(Debug, Clone)]
pub struct Record {
    /// 1-based data row number, in input order.
    pub row: usize,
    pub source_name: String,
    pub hierarchy: Hierarchy,
    pub cells: Vec<String>,
}

impl Record {
    /// Lowercased extension of the source file, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.source_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Grouping key for collision detection.
    pub fn hierarchy_key(&self) -> HierarchyKey {
        HierarchyKey {
            levels: self.hierarchy.levels().map(Field::clone),
            extension: self.extension().unwrap_or_default(),
        }
    }
}

/// One row of the suffix-variant CSV. `source_path` may carry a relative
/// directory that the destination mirrors.
#[derive(Debug, Clone)]
pub struct SuffixRecord {
    /// 1-based data row number, in input order.
    pub row: usize,
    pub source_path: String,
    pub suffix: Field,
    pub cells: Vec<String>,
}

/// Grouping key: the normalized hierarchy levels plus the lowercased file
/// extension. Two records with equal keys would otherwise produce an
/// identical destination name; records that differ only in extension are
/// not a collision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HierarchyKey {
    pub levels: [Field; 7],
    pub extension: String,
}

impl fmt::Display for HierarchyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, level) in self.levels.iter().enumerate() {
            if index > 0 {
                f.write_str("_")?;
            }
            f.write_str(level.or_zero())?;
        }
        if !self.extension.is_empty() {
            write!(f, ".{}", self.extension)?;
        }
        Ok(())
    }
}
