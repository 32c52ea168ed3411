//! Run driver with explicit stages.
//!
//! Stages in order:
//! 1. **Ingest**: read and normalize the rule CSV
//! 2. **Plan**: group collisions, assemble names, lay out destinations
//! 3. **Validate**: existence and extension checks over the whole set
//! 4. **Copy**: create directories and copy files, in input order
//! 5. **Audit**: write the date-stamped audit CSV
//!
//! Validation is a hard gate: any violation aborts the run before stage 4,
//! so no partial output tree is ever produced.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use shelver_ingest::{read_hierarchy_csv, read_suffix_csv};
use shelver_plan::{
    PlanOutcome, PlannedCopy, ValidationReport, check_sources, plan_hierarchy, plan_suffix,
};

use crate::audit::write_audit_csv;
use crate::copy::execute_copies;
use crate::types::{Mode, RunOptions, RunResult};

/// Run the whole pipeline for one CSV.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    match options.mode {
        Mode::Hierarchy => run_hierarchy(options),
        Mode::Suffix => run_suffix(options),
    }
}

fn run_hierarchy(options: &RunOptions) -> Result<RunResult> {
    let ingest_span = info_span!("ingest", csv = %options.csv.display());
    let ingest_start = Instant::now();
    let table = ingest_span.in_scope(|| read_hierarchy_csv(&options.csv))?;
    info!(
        rows = table.records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let plan_span = info_span!("plan");
    let plan_start = Instant::now();
    let outcome = plan_span.in_scope(|| {
        plan_hierarchy(&table.records, &options.input_dir, &options.output_dir)
    })?;
    info!(
        planned = outcome.copies.len(),
        duration_ms = plan_start.elapsed().as_millis(),
        "plan complete"
    );

    let sources = table
        .records
        .iter()
        .map(|record| (record.row, record.source_name.as_str()));
    let report = validate(outcome.violations.clone(), sources, &options.input_dir);
    write_json_report(options, &report)?;
    if !report.is_clean() {
        return Ok(aborted(options, table.records.len(), report));
    }
    if options.dry_run {
        return Ok(dry(options, table.records.len(), &outcome));
    }

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("create output directory {}", options.output_dir.display())
    })?;
    let copied = copy_stage(&outcome.copies)?;

    let audit_path = if options.write_audit {
        let audit_span = info_span!("audit");
        let path = audit_span.in_scope(|| {
            write_audit_csv(
                &options.output_dir,
                &table.headers,
                &table.records,
                &outcome.copies,
            )
        })?;
        Some(path)
    } else {
        None
    };

    Ok(RunResult {
        output_dir: options.output_dir.clone(),
        rows: table.records.len(),
        copied,
        by_type: count_by_type(&outcome.copies),
        audit_path,
        report,
        dry_run: false,
    })
}

fn run_suffix(options: &RunOptions) -> Result<RunResult> {
    let ingest_span = info_span!("ingest", csv = %options.csv.display());
    let table = ingest_span.in_scope(|| read_suffix_csv(&options.csv))?;
    info!(rows = table.records.len(), "ingest complete");

    let plan_span = info_span!("plan");
    let outcome = plan_span.in_scope(|| {
        plan_suffix(&table.records, &options.input_dir, &options.output_dir)
    });
    info!(planned = outcome.copies.len(), "plan complete");

    // Directory rows were dropped during planning; only planned sources
    // are checked for existence.
    let sources = outcome
        .copies
        .iter()
        .map(|copy| (copy.row, copy.source_name.as_str()));
    let report = validate(outcome.violations.clone(), sources, &options.input_dir);
    write_json_report(options, &report)?;
    if !report.is_clean() {
        return Ok(aborted(options, table.records.len(), report));
    }
    if options.dry_run {
        return Ok(dry(options, table.records.len(), &outcome));
    }

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("create output directory {}", options.output_dir.display())
    })?;
    let copied = copy_stage(&outcome.copies)?;

    Ok(RunResult {
        output_dir: options.output_dir.clone(),
        rows: table.records.len(),
        copied,
        by_type: count_by_type(&outcome.copies),
        audit_path: None,
        report,
        dry_run: false,
    })
}

/// Stage 3: merge plan-time violations with the existence check.
fn validate<'a, I>(
    plan_violations: Vec<shelver_plan::Violation>,
    sources: I,
    input_dir: &Path,
) -> ValidationReport
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let validate_span = info_span!("validate");
    let validate_start = Instant::now();
    let mut report = ValidationReport::default();
    validate_span.in_scope(|| {
        report.extend(check_sources(sources, input_dir));
        report.extend(plan_violations);
    });
    info!(
        violations = report.len(),
        duration_ms = validate_start.elapsed().as_millis(),
        "validation complete"
    );
    report
}

/// Stage 4: execute all planned copies.
fn copy_stage(copies: &[PlannedCopy]) -> Result<usize> {
    let copy_span = info_span!("copy");
    let copy_start = Instant::now();
    copy_span.in_scope(|| execute_copies(copies))?;
    info!(
        copied = copies.len(),
        duration_ms = copy_start.elapsed().as_millis(),
        "copy complete"
    );
    Ok(copies.len())
}

fn count_by_type(copies: &[PlannedCopy]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for copy in copies {
        *counts.entry(copy.type_label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Result shell for a run stopped by validation; nothing was copied.
fn aborted(options: &RunOptions, rows: usize, report: ValidationReport) -> RunResult {
    RunResult {
        output_dir: options.output_dir.clone(),
        rows,
        copied: 0,
        by_type: BTreeMap::new(),
        audit_path: None,
        report,
        dry_run: options.dry_run,
    }
}

/// Result shell for a clean dry run; the plan is counted but not executed.
fn dry(options: &RunOptions, rows: usize, outcome: &PlanOutcome) -> RunResult {
    info!(planned = outcome.copies.len(), "dry run, skipping copy");
    RunResult {
        output_dir: options.output_dir.clone(),
        rows,
        copied: 0,
        by_type: count_by_type(&outcome.copies),
        audit_path: None,
        report: ValidationReport::default(),
        dry_run: true,
    }
}

/// Write the violation report as JSON when requested. Written on clean
/// runs too, so downstream tooling can rely on the file existing.
fn write_json_report(options: &RunOptions, report: &ValidationReport) -> Result<()> {
    let Some(path) = &options.report_json else {
        return Ok(());
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let file = fs::File::create(path)
        .with_context(|| format!("create report {}", path.display()))?;
    serde_json::to_writer_pretty(file, &report.violations)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
