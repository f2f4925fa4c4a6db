//! Error types for DMAT operations

/// Errors that can occur while encoding, decoding, or slicing matrix files.
///
/// Every variant carries the structured context (expected vs. actual byte
/// counts, requested vs. declared bounds) needed to diagnose a failure
/// without free-text messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmatError {
    /// Fewer bytes were available than a field requires
    ShortRead { expected: usize, actual: usize },
    /// The data region is shorter than the header-declared shape demands
    TruncatedData { expected: u64, actual: u64 },
    /// Requested row is not below the declared row count
    RowOutOfRange { row: usize, rows: usize },
    /// Requested column is not below the declared column count
    ColumnOutOfRange { col: usize, cols: usize },
    /// Operand shapes are incompatible for the requested operation
    ShapeMismatch {
        rows: usize,
        cols: usize,
        other_rows: usize,
        other_cols: usize,
    },
    /// A size or offset calculation would overflow
    SizeOverflow,
    /// A byte region cannot be reinterpreted as typed values
    Misaligned,
    /// A range selector string has an invalid format
    InvalidRange,
    /// The matrix is not square (rejected before invoking the inversion routine)
    NotSquare { rows: usize, cols: usize },
    /// The matrix is singular, no inverse exists
    Singular,
    /// Malformed input rejected by the inversion routine
    InvalidInput,
}

impl core::fmt::Display for DmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DmatError::ShortRead { expected, actual } => {
                write!(f, "short read: needed {expected} bytes, got {actual}")
            }
            DmatError::TruncatedData { expected, actual } => {
                write!(f, "truncated data region: declared {expected} bytes, found {actual}")
            }
            DmatError::RowOutOfRange { row, rows } => {
                write!(f, "row {row} out of range for {rows} rows")
            }
            DmatError::ColumnOutOfRange { col, cols } => {
                write!(f, "column {col} out of range for {cols} columns")
            }
            DmatError::ShapeMismatch {
                rows,
                cols,
                other_rows,
                other_cols,
            } => {
                write!(f, "shape mismatch: {rows}x{cols} vs {other_rows}x{other_cols}")
            }
            DmatError::SizeOverflow => write!(f, "size calculation would overflow"),
            DmatError::Misaligned => write!(f, "byte region not interpretable as f64 values"),
            DmatError::InvalidRange => write!(f, "invalid range format"),
            DmatError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows}x{cols}")
            }
            DmatError::Singular => write!(f, "matrix is singular"),
            DmatError::InvalidInput => write!(f, "invalid data input"),
        }
    }
}

impl core::error::Error for DmatError {}

/// Result type for DMAT core operations
pub type Result<T> = core::result::Result<T, DmatError>;
