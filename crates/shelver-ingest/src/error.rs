//! Error types for rule CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the rename CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Rule CSV not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or parse the CSV.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No column naming the source file was found in the header.
    #[error("no filename column (orig_filename, filename or fn) in {path}")]
    MissingFilenameColumn { path: PathBuf },

    /// No suffix column was found in the header (suffix mode only).
    #[error("no suffix column in {path}")]
    MissingSuffixColumn { path: PathBuf },

    /// A data row has an empty filename cell.
    #[error("row {row} of {path} has an empty filename")]
    EmptyFilename { row: usize, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
