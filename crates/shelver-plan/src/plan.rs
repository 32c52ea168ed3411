//! Whole-set copy planning for both rule variants.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use shelver_model::{MediaType, NameError, Record, SuffixRecord};

use crate::assemble::assemble_base_name;
use crate::group::assign_extra_ids;
use crate::path::destination_dir;
use crate::validate::Violation;

/// One fully planned copy operation.
#[derive(Debug, Clone)]
pub struct PlannedCopy {
    /// 1-based input row this copy came from.
    pub row: usize,
    /// Resolved source path (input dir joined).
    pub source: PathBuf,
    /// Source name as given in the CSV.
    pub source_name: String,
    /// Assembled destination file name, extension included.
    pub new_name: String,
    pub dest_dir: PathBuf,
    pub dest_path: PathBuf,
    /// Media-type label in hierarchy mode, extension in suffix mode.
    /// Used only for the run summary.
    pub type_label: String,
    pub extra_id: Option<char>,
}

/// Planned copies plus the violations found while planning. A record with
/// a violation produces no copy; the caller aborts before copying when any
/// violation exists.
#[derive(Debug, Default)]
pub struct PlanOutcome {
    pub copies: Vec<PlannedCopy>,
    pub violations: Vec<Violation>,
}

/// Plan the hierarchy variant: assign extra ids across the whole set,
/// assemble each name, and lay out `<type>/book_<b>/unit_<u>` destinations.
///
/// Unknown extensions and degenerate hierarchies become violations; a
/// collision group deeper than 26 members is a hard error.
pub fn plan_hierarchy(
    records: &[Record],
    input_dir: &Path,
    output_root: &Path,
) -> Result<PlanOutcome, NameError> {
    let extra_ids = assign_extra_ids(records)?;

    let mut outcome = PlanOutcome::default();
    for record in records {
        let extension = record.extension();
        let media = extension.as_deref().and_then(MediaType::from_extension);
        if media.is_none() {
            outcome.violations.push(Violation::UnrecognizedExtension {
                row: record.row,
                file: record.source_name.clone(),
            });
        }
        let base = assemble_base_name(&record.hierarchy);
        if base.is_none() {
            outcome.violations.push(Violation::DegenerateName {
                row: record.row,
                file: record.source_name.clone(),
            });
        }
        let (Some(media), Some(base), Some(extension)) = (media, base, extension) else {
            continue;
        };

        let extra_id = extra_ids.get(&record.row).copied();
        let new_name = match extra_id {
            Some(id) => format!("{base}{id}.{extension}"),
            None => format!("{base}.{extension}"),
        };
        let dest_dir = destination_dir(output_root, media, &record.hierarchy);
        let dest_path = dest_dir.join(&new_name);
        debug!(
            row = record.row,
            source = %record.source_name,
            new_name = %new_name,
            dest = %dest_path.display(),
            "copy planned"
        );
        outcome.copies.push(PlannedCopy {
            row: record.row,
            source: input_dir.join(&record.source_name),
            source_name: record.source_name.clone(),
            new_name,
            dest_dir,
            dest_path,
            type_label: media.label().to_string(),
            extra_id,
        });
    }

    outcome
        .violations
        .extend(destination_collisions(&outcome.copies));
    Ok(outcome)
}

/// Plan the suffix variant: append the cleaned suffix to each file's stem
/// and mirror its relative directory under the output root.
///
/// Rows whose source resolves to a directory are skipped, as in the
/// original rule. No media-type table applies in this mode.
pub fn plan_suffix(
    records: &[SuffixRecord],
    input_dir: &Path,
    output_root: &Path,
) -> PlanOutcome {
    let mut outcome = PlanOutcome::default();
    for record in records {
        let source = input_dir.join(&record.source_path);
        if source.is_dir() {
            debug!(row = record.row, path = %record.source_path, "skipping directory row");
            continue;
        }

        let relative = Path::new(&record.source_path);
        let stem = relative
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let extension = relative
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let new_name = match record.suffix.as_str() {
            Some(suffix) => format!("{stem}_{}{extension}", safe_suffix(suffix)),
            None => format!("{stem}{extension}"),
        };

        let dest_dir = match relative.parent() {
            Some(parent) if parent != Path::new("") => output_root.join(parent),
            _ => output_root.to_path_buf(),
        };
        let dest_path = dest_dir.join(&new_name);
        debug!(
            row = record.row,
            source = %record.source_path,
            new_name = %new_name,
            dest = %dest_path.display(),
            "copy planned"
        );
        outcome.copies.push(PlannedCopy {
            row: record.row,
            source,
            source_name: record.source_path.clone(),
            new_name,
            dest_dir,
            dest_path,
            type_label: extension.trim_start_matches('.').to_string(),
            extra_id: None,
        });
    }

    outcome
        .violations
        .extend(destination_collisions(&outcome.copies));
    outcome
}

/// Interior whitespace runs in a suffix become single underscores so the
/// suffix stays one path-safe token.
fn safe_suffix(suffix: &str) -> String {
    suffix.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Two planned copies aiming at the same destination would silently
/// overwrite each other; report the later one against the first.
fn destination_collisions(copies: &[PlannedCopy]) -> Vec<Violation> {
    let mut seen: BTreeMap<&Path, usize> = BTreeMap::new();
    let mut violations = Vec::new();
    for copy in copies {
        match seen.get(copy.dest_path.as_path()) {
            Some(first_row) => violations.push(Violation::DestinationCollision {
                row: copy.row,
                first_row: *first_row,
                path: copy.dest_path.clone(),
            }),
            None => {
                seen.insert(copy.dest_path.as_path(), copy.row);
            }
        }
    }
    violations
}
