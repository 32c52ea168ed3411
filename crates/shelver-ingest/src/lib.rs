//! Rename-rule CSV loading and row normalization.
//!
//! Reads the header-driven rule CSV into [`shelver_model`] records. Every
//! cell is trimmed; absent or all-whitespace hierarchy values become the
//! blank sentinel. The filename column is exempt from the sentinel: it is
//! only trimmed, because it must remain a usable filesystem path.

pub mod error;
pub mod header;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{RenameTable, SuffixTable, read_hierarchy_csv, read_suffix_csv};
