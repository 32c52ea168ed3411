//! Errors raised while deriving new file names.

use thiserror::Error;

/// Errors that can occur when building a new file name from a record.
#[derive(Debug, Error)]
pub enum NameError {
    /// Every hierarchy level of the record is blank, so the assembled base
    /// name would be empty.
    #[error("row {row}: every hierarchy level is blank for '{file}'")]
    DegenerateName { row: usize, file: String },

    /// More than 26 records share one hierarchy key; single-letter ids are
    /// exhausted.
    #[error("more than 26 files share the level key '{key}'; letter ids are exhausted")]
    ExtraIdExhausted { key: String },
}
