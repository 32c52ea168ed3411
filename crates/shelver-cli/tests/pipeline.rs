//! End-to-end tests for the run driver.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use shelver_cli::pipeline::run;
use shelver_cli::types::{Mode, RunOptions};

/// Lay out a workspace with an `in/` directory holding `files` and a rule
/// CSV with the given content.
fn workspace(csv: &str, files: &[&str]) -> (TempDir, RunOptions) {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("in");
    fs::create_dir(&input_dir).unwrap();
    for file in files {
        let path = input_dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, file.as_bytes()).unwrap();
    }
    let csv_path = dir.path().join("rename.csv");
    fs::write(&csv_path, csv).unwrap();
    let options = RunOptions {
        csv: csv_path,
        input_dir,
        output_dir: dir.path().join("out"),
        mode: Mode::Hierarchy,
        dry_run: false,
        write_audit: true,
        report_json: None,
    };
    (dir, options)
}

fn find_audit(output_dir: &Path) -> Option<PathBuf> {
    fs::read_dir(output_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("rename-") && name.ends_with(".csv"))
        })
}

#[test]
fn test_hierarchy_run_end_to_end() {
    let csv = "\
book,Unit,Section,Sub-section,Task,Activity Step,Question,orig_filename\n\
1,1,2,1,1,,,U1_1_1.mp4\n\
1,1,2,1,3a,,,u1_2.1.3_a.jpg\n\
2,1,,,,,,cover.png\n";
    let (dir, options) = workspace(csv, &["U1_1_1.mp4", "u1_2.1.3_a.jpg", "cover.png"]);

    let result = run(&options).unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.rows, 3);
    assert_eq!(result.copied, 3);
    assert_eq!(result.by_type.get("video"), Some(&1));
    assert_eq!(result.by_type.get("image"), Some(&2));

    let out = dir.path().join("out");
    assert!(out.join("video/book_1/unit_1/b1_u1_2_1_1.mp4").is_file());
    assert!(out.join("image/book_1/unit_1/b1_u1_2_1_3a.jpg").is_file());
    assert!(out.join("image/book_2/unit_1/b2_u1.png").is_file());
    // Copies, not moves.
    assert!(dir.path().join("in/U1_1_1.mp4").is_file());
}

#[test]
fn test_collisions_get_letter_suffixes_in_row_order() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
1,1,2,1,3,,,first.jpg\n\
1,1,2,1,3,,,second.jpg\n\
1,1,2,1,3,,,third.jpg\n\
1,1,2,1,3,,,clip.mp4\n";
    let (dir, options) = workspace(csv, &["first.jpg", "second.jpg", "third.jpg", "clip.mp4"]);

    let result = run(&options).unwrap();
    assert_eq!(result.copied, 4);

    let image_dir = dir.path().join("out/image/book_1/unit_1");
    assert!(image_dir.join("b1_u1_2_1_3a.jpg").is_file());
    assert!(image_dir.join("b1_u1_2_1_3b.jpg").is_file());
    assert!(image_dir.join("b1_u1_2_1_3c.jpg").is_file());
    // Same hierarchy but a different extension is not part of the group.
    assert!(
        dir.path()
            .join("out/video/book_1/unit_1/b1_u1_2_1_3.mp4")
            .is_file()
    );
}

#[test]
fn test_validation_is_exhaustive_and_blocks_all_copies() {
    // 10 records: rows 2, 5 and 9 missing from disk, rows 3 and 7 carry
    // unknown extensions.
    let mut csv =
        String::from("book,unit,section,subsection,task,activity_step,question,orig_filename\n");
    let mut files = Vec::new();
    for row in 1..=10 {
        let name = match row {
            3 | 7 => format!("f{row}.wmv"),
            _ => format!("f{row}.jpg"),
        };
        if !matches!(row, 2 | 5 | 9) {
            files.push(name.clone());
        }
        csv.push_str(&format!("1,{row},,,,,,{name}\n"));
    }
    let file_refs: Vec<&str> = files.iter().map(String::as_str).collect();
    let (dir, options) = workspace(&csv, &file_refs);

    let result = run(&options).unwrap();

    assert!(result.has_errors());
    assert_eq!(result.copied, 0);
    let grouped = result.report.grouped();
    assert_eq!(grouped.get("missing source files").unwrap().len(), 3);
    assert_eq!(grouped.get("unrecognized extensions").unwrap().len(), 2);
    assert!(
        !dir.path().join("out").exists(),
        "no output tree may appear on a failed run"
    );
}

#[test]
fn test_degenerate_row_is_rejected() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
,,,,,,,orphan.jpg\n";
    let (_dir, options) = workspace(csv, &["orphan.jpg"]);

    let result = run(&options).unwrap();
    assert!(result.has_errors());
    assert!(
        result
            .report
            .grouped()
            .contains_key("degenerate names (all levels blank)")
    );
}

#[test]
fn test_dry_run_copies_nothing() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
2,1,,,,,,a.jpg\n";
    let (dir, mut options) = workspace(csv, &["a.jpg"]);
    options.dry_run = true;

    let result = run(&options).unwrap();

    assert!(!result.has_errors());
    assert!(result.dry_run);
    assert_eq!(result.copied, 0);
    assert_eq!(result.by_type.get("image"), Some(&1));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_audit_csv_round_trips_input_rows() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
2,1,,,,,,a.jpg\n";
    let (dir, options) = workspace(csv, &["a.jpg"]);

    let result = run(&options).unwrap();
    let audit = result.audit_path.expect("audit csv written");
    assert_eq!(find_audit(&dir.path().join("out")), Some(audit.clone()));

    let mut reader = csv::Reader::from_path(&audit).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers.first().map(String::as_str), Some("book"));
    assert_eq!(
        headers.last().map(String::as_str),
        Some("new_dir"),
        "audit gains new_name/new_dir columns"
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(&row[0], "2");
    assert_eq!(&row[7], "a.jpg");
    assert_eq!(&row[8], "b2_u1.jpg");
    assert!(row[9].contains("image"));
}

#[test]
fn test_no_audit_flag() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
2,1,,,,,,a.jpg\n";
    let (dir, mut options) = workspace(csv, &["a.jpg"]);
    options.write_audit = false;

    let result = run(&options).unwrap();
    assert!(result.audit_path.is_none());
    assert_eq!(find_audit(&dir.path().join("out")), None);
}

#[test]
fn test_json_report_lists_violations() {
    let csv = "\
book,unit,section,subsection,task,activity_step,question,orig_filename\n\
1,1,,,,,,gone.jpg\n";
    let (dir, mut options) = workspace(csv, &[]);
    options.report_json = Some(dir.path().join("report.json"));

    let result = run(&options).unwrap();
    assert!(result.has_errors());

    let raw = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["kind"], "missing_source");
    assert_eq!(list[0]["row"], 1);
}

#[test]
fn test_suffix_mode_end_to_end() {
    let csv = "suffix,orig_filename\nsuffix1,dirA/a.mp3\nsuffix2 with space,dirB/b.wmv\n";
    let (dir, mut options) = workspace(csv, &["dirA/a.mp3", "dirB/b.wmv"]);
    options.mode = Mode::Suffix;

    let result = run(&options).unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.copied, 2);
    let out = dir.path().join("out");
    assert!(out.join("dirA/a_suffix1.mp3").is_file());
    assert!(out.join("dirB/b_suffix2_with_space.wmv").is_file());
}

#[test]
fn test_suffix_mode_missing_source_aborts() {
    let csv = "suffix,orig_filename\nv2,dirA/gone.mp3\n";
    let (dir, mut options) = workspace(csv, &[]);
    options.mode = Mode::Suffix;

    let result = run(&options).unwrap();
    assert!(result.has_errors());
    assert!(!dir.path().join("out").exists());
}
