//! Copy executor: the only stage that mutates the filesystem.

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use shelver_plan::PlannedCopy;

/// Execute planned copies in original row order.
///
/// Destination directories are created as needed; re-creating an existing
/// directory is a no-op. Sources are copied, never moved: one input file
/// may back several outputs. Any io failure is fatal and names the
/// offending row and paths.
pub fn execute_copies(copies: &[PlannedCopy]) -> Result<()> {
    for copy in copies {
        fs::create_dir_all(&copy.dest_dir).with_context(|| {
            format!(
                "row {}: create directory {}",
                copy.row,
                copy.dest_dir.display()
            )
        })?;
        fs::copy(&copy.source, &copy.dest_path).with_context(|| {
            format!(
                "row {}: copy {} to {}",
                copy.row,
                copy.source.display(),
                copy.dest_path.display()
            )
        })?;
        debug!(
            row = copy.row,
            source = %copy.source.display(),
            dest = %copy.dest_path.display(),
            "file copied"
        );
    }
    Ok(())
}
