//! Rule CSV readers for the hierarchy and suffix variants.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use shelver_model::{Field, Hierarchy, Record, SuffixRecord};

use crate::error::{IngestError, Result};
use crate::header::{canonical_column, normalize_header};

/// The hierarchy-variant rule table: raw headers (for the audit writer)
/// plus one [`Record`] per data row, in input order.
#[derive(Debug)]
pub struct RenameTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// The suffix-variant rule table.
#[derive(Debug)]
pub struct SuffixTable {
    pub headers: Vec<String>,
    pub records: Vec<SuffixRecord>,
}

/// Read the hierarchy-variant CSV.
///
/// Hierarchy columns that are absent from the header are treated as blank
/// on every row; a missing filename column is an error.
pub fn read_hierarchy_csv(path: &Path) -> Result<RenameTable> {
    let (headers, columns, rows) = read_rows(path)?;
    let filename_index =
        *columns
            .get("orig_filename")
            .ok_or_else(|| IngestError::MissingFilenameColumn {
                path: path.to_path_buf(),
            })?;

    let level = |cells: &[String], name: &str| -> Field {
        Field::parse_opt(columns.get(name).and_then(|index| {
            cells.get(*index).map(String::as_str)
        }))
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, cells) in rows.into_iter().enumerate() {
        let row = index + 1;
        let source_name = cells
            .get(filename_index)
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default();
        if source_name.is_empty() {
            return Err(IngestError::EmptyFilename {
                row,
                path: path.to_path_buf(),
            });
        }
        let hierarchy = Hierarchy {
            book: level(&cells, "book"),
            unit: level(&cells, "unit"),
            section: level(&cells, "section"),
            subsection: level(&cells, "subsection"),
            task: level(&cells, "task"),
            activity_step: level(&cells, "activity_step"),
            question: level(&cells, "question"),
        };
        records.push(Record {
            row,
            source_name,
            hierarchy,
            cells,
        });
    }

    debug!(
        path = %path.display(),
        rows = records.len(),
        columns = headers.len(),
        "hierarchy csv loaded"
    );
    Ok(RenameTable { headers, records })
}

/// Read the suffix-variant CSV (`suffix, orig_filename`).
pub fn read_suffix_csv(path: &Path) -> Result<SuffixTable> {
    let (headers, columns, rows) = read_rows(path)?;
    let filename_index =
        *columns
            .get("orig_filename")
            .ok_or_else(|| IngestError::MissingFilenameColumn {
                path: path.to_path_buf(),
            })?;
    let suffix_index = *columns
        .get("suffix")
        .ok_or_else(|| IngestError::MissingSuffixColumn {
            path: path.to_path_buf(),
        })?;

    let mut records = Vec::with_capacity(rows.len());
    for (index, cells) in rows.into_iter().enumerate() {
        let row = index + 1;
        let source_path = cells
            .get(filename_index)
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default();
        if source_path.is_empty() {
            return Err(IngestError::EmptyFilename {
                row,
                path: path.to_path_buf(),
            });
        }
        let suffix = Field::parse_opt(cells.get(suffix_index).map(String::as_str));
        records.push(SuffixRecord {
            row,
            source_path,
            suffix,
            cells,
        });
    }

    debug!(
        path = %path.display(),
        rows = records.len(),
        "suffix csv loaded"
    );
    Ok(SuffixTable { headers, records })
}

/// Read headers and raw rows. Returns the trimmed raw headers, a canonical
/// column index (first occurrence wins) and each row padded to header width.
fn read_rows(path: &Path) -> Result<(Vec<String>, BTreeMap<String, usize>, Vec<Vec<String>>)> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut columns = BTreeMap::new();
    for (index, header) in headers.iter().enumerate() {
        let canonical = canonical_column(&normalize_header(header)).to_string();
        columns.entry(canonical).or_insert(index);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        // Short rows are padded so hierarchy lookups see blanks, not gaps.
        // Over-long rows keep their trailing cells verbatim.
        if cells.len() < headers.len() {
            cells.resize(headers.len(), String::new());
        }
        rows.push(cells);
    }
    Ok((headers, columns, rows))
}
