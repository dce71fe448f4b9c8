//! Error types for bridge-clean.

use thiserror::Error;

/// Errors produced while cleaning or loading bridge rows.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("malformed {field} {value:?}: {reason}")]
    MalformedField {
        field:  &'static str,
        value:  String,
        reason: String,
    },

    /// A field-level error, tagged with the 1-based data row it came from.
    #[error("row {row}: {source}")]
    MalformedRecord {
        row:    usize,
        source: Box<CleanError>,
    },

    #[error("row {row} has {found} fields, expected at least {expected}")]
    ShortRow {
        row:      usize,
        found:    usize,
        expected: usize,
    },

    #[error("year header has no start year in column {column}")]
    MissingStartYear { column: usize },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CleanError {
    pub(crate) fn field(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        CleanError::MalformedField {
            field,
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Alias for `Result<T, CleanError>`.
pub type CleanResult<T> = Result<T, CleanError>;
