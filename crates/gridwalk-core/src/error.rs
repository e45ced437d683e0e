//! Error types for grid construction and path queries.

use thiserror::Error;

/// Errors reported by grid constructors and path queries.
///
/// Address lookups never produce these; they return `None` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A grid must have at least one row and one column, and its cell count
    /// must fit in a `usize`.
    #[error("invalid grid dimensions: {columns} columns x {rows} rows")]
    InvalidDimensions { columns: usize, rows: usize },

    /// Cell width and height must be finite and positive.
    #[error("invalid cell size: {width} x {height} (must be > 0)")]
    InvalidCellSize { width: f64, height: f64 },

    /// Hex radius must be finite and positive.
    #[error("invalid hex radius: {0} (must be > 0)")]
    InvalidRadius(f64),

    /// A path endpoint lies outside the grid.
    #[error("index {index} outside grid of {size} cells")]
    InvalidRange { index: usize, size: usize },

    /// A per-cell cost table does not cover the grid exactly.
    #[error("cost table has {actual} entries, grid has {expected} cells")]
    CostTableSize { expected: usize, actual: usize },
}

/// Result type for fallible grid operations.
pub type GridResult<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = GridError::InvalidRange { index: 30, size: 25 };
        assert_eq!(e.to_string(), "index 30 outside grid of 25 cells");

        let e = GridError::InvalidDimensions { columns: 0, rows: 3 };
        assert!(e.to_string().contains("0 columns"));

        let e = GridError::CostTableSize {
            expected: 25,
            actual: 24,
        };
        assert!(e.to_string().contains("24 entries"));
    }
}
