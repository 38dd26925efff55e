//! Errors raised while assembling a [`Frame`](crate::Frame).

use thiserror::Error;

/// Error type for table model construction.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ModelError {
    /// The row index does not have one label per row.
    #[error("Row index has {index} labels but the table has {height} rows")]
    IndexLength {
        /// Length of the supplied index.
        index: usize,
        /// Number of rows in the table.
        height: usize,
    },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
