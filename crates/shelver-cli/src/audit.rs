//! Audit CSV writer.
//!
//! After a successful run, a date-stamped CSV in the output root records,
//! per input row, all original columns plus the computed `new_name` and
//! `new_dir`. Internal bookkeeping never appears in the audit.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use shelver_model::Record;
use shelver_plan::PlannedCopy;

/// Write the audit CSV and return its path.
pub fn write_audit_csv(
    output_dir: &Path,
    headers: &[String],
    records: &[Record],
    copies: &[PlannedCopy],
) -> Result<PathBuf> {
    let name = format!("rename-{}.csv", Local::now().format("%Y-%m-%d"));
    let path = output_dir.join(name);

    let by_row: BTreeMap<usize, &PlannedCopy> =
        copies.iter().map(|copy| (copy.row, copy)).collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("create audit csv {}", path.display()))?;

    let mut header_row: Vec<&str> = headers.iter().map(String::as_str).collect();
    header_row.push("new_name");
    header_row.push("new_dir");
    writer
        .write_record(&header_row)
        .context("write audit header")?;

    for record in records {
        let mut row: Vec<String> = record.cells.clone();
        // Pad short rows; over-long rows round-trip verbatim.
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        match by_row.get(&record.row) {
            Some(copy) => {
                row.push(copy.new_name.clone());
                row.push(copy.dest_dir.display().to_string());
            }
            None => {
                row.push(String::new());
                row.push(String::new());
            }
        }
        writer
            .write_record(&row)
            .with_context(|| format!("write audit row {}", record.row))?;
    }
    writer.flush().context("flush audit csv")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelver_model::{Field, Hierarchy};
    use tempfile::TempDir;

    fn record(row: usize, cells: Vec<&str>) -> Record {
        Record {
            row,
            source_name: cells.last().unwrap().to_string(),
            hierarchy: Hierarchy {
                book: Field::parse(cells[0]),
                unit: Field::parse(cells[1]),
                section: Field::Blank,
                subsection: Field::Blank,
                task: Field::Blank,
                activity_step: Field::Blank,
                question: Field::Blank,
            },
            cells: cells.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_audit_round_trips_original_cells() {
        let dir = TempDir::new().unwrap();
        let headers = vec![
            "book".to_string(),
            "unit".to_string(),
            "orig_filename".to_string(),
        ];
        let records = vec![record(1, vec!["2", "1", "a.jpg"])];
        let copies = vec![PlannedCopy {
            row: 1,
            source: PathBuf::from("in/a.jpg"),
            source_name: "a.jpg".to_string(),
            new_name: "b2_u1.jpg".to_string(),
            dest_dir: PathBuf::from("out/image/book_2/unit_1"),
            dest_path: PathBuf::from("out/image/book_2/unit_1/b2_u1.jpg"),
            type_label: "image".to_string(),
            extra_id: None,
        }];

        let path = write_audit_csv(dir.path(), &headers, &records, &copies).unwrap();
        assert!(
            path.file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("rename-")
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header = reader.headers().unwrap().clone();
        assert_eq!(
            header.iter().collect::<Vec<_>>(),
            vec!["book", "unit", "orig_filename", "new_name", "new_dir"]
        );
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][2], "a.jpg");
        assert_eq!(&rows[0][3], "b2_u1.jpg");
        assert!(rows[0][4].contains("book_2"));
    }

    #[test]
    fn test_cells_beyond_the_header_survive_the_audit() {
        let dir = TempDir::new().unwrap();
        let headers = vec![
            "book".to_string(),
            "unit".to_string(),
            "orig_filename".to_string(),
        ];
        let mut long = record(1, vec!["2", "1", "a.jpg"]);
        long.cells.push("keep me".to_string());
        let records = vec![long];

        let path = write_audit_csv(dir.path(), &headers, &records, &[]).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(&rows[0][3], "keep me");
    }
}
