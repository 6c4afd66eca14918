//! Persistence boundary: flat delimited-text codec.

/// Flat-file load/save and line codec.
pub mod flatfile;

use std::path::PathBuf;

use thiserror::Error;

/// Delimiter between fields on a persisted line.
pub const FIELD_DELIMITER: char = ',';

/// Errors surfaced by the persistence adapter.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying file I/O failed.
    #[error("i/o on {path}: {source}")]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Originating error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
