//! # Stats Errors

use thiserror::Error;

/// Errors raised by grid edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Row index past the end of the data source
    #[error("Row {row} out of range (rows: {len})")]
    RowOutOfRange {
        /// Requested row
        row: usize,
        /// Number of rows
        len: usize,
    },

    /// Column holds a read-only value
    #[error("Column {column} is not editable")]
    ColumnNotEditable {
        /// Column name
        column: String,
    },
}

/// Result type alias for grid operations.
pub type StatsResult<T> = Result<T, StatsError>;
