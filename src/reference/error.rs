use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading reference data.
///
/// These are initialization failures: a table that fails to load is never
/// partially populated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceDataError {
    /// The resource is missing or unreadable.
    #[error("cannot read manufacturer table {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resource is not well-formed CSV.
    #[error("manufacturer table is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have exactly two fields, or a line is blank.
    #[error("manufacturer table line {line}: expected 2 fields, found {fields}")]
    Malformed {
        /// 1-based line where the row starts.
        line: u64,
        /// Number of fields found; 0 for a blank line.
        fields: usize,
    },

    /// The resource is empty; the header row is mandatory.
    #[error("manufacturer table has no header row")]
    MissingHeader,
}
