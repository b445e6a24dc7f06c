use thiserror::Error;

/// Errors that can occur while building or subsetting a packed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A target table's row count does not match the dataset's graph count.
    #[error("target table has {got} rows but the dataset holds {expected} graphs")]
    TargetCountMismatch { expected: usize, got: usize },

    /// A target row's width differs from the table's declared width.
    #[error("target row {row} has {got} values, expected {expected}")]
    TargetWidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A selection index fell outside the dataset's graph range.
    #[error("selection index {index} is out of range for a dataset of {graph_count} graphs")]
    IndexOutOfRange { index: usize, graph_count: usize },
}
