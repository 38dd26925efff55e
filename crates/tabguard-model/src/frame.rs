//! Frames and indexed columns.
//!
//! A [`Frame`] pairs a `DataFrame` with a row index. Columns handed to series
//! validators are [`IndexedColumn`]s, which carry the same index so a check
//! can report row labels instead of raw offsets.

use std::collections::HashSet;

use polars::prelude::{AnyValue, Column, DataFrame, DataType, NamedFrom, Series};

use crate::error::{ModelError, Result};
use crate::row::RowId;

/// Name given to the default `0..N-1` row index.
pub const DEFAULT_INDEX_NAME: &str = "index";

/// Name of the series returned by [`Frame::column_names`].
pub const COLUMNS_SERIES_NAME: &str = "columns";

/// A table of named columns sharing one row index.
///
/// Invariant: the index has exactly one label per row.
#[derive(Debug, Clone)]
pub struct Frame {
    df: DataFrame,
    index: Series,
}

impl Frame {
    /// Wrap a DataFrame with the default `0..N-1` Int64 row index.
    pub fn new(df: DataFrame) -> Self {
        let height = df.height() as i64;
        let index = Series::new(DEFAULT_INDEX_NAME.into(), (0..height).collect::<Vec<i64>>());
        Self { df, index }
    }

    /// Wrap a DataFrame with a caller-supplied row index.
    pub fn with_index(df: DataFrame, index: Series) -> Result<Self> {
        if index.len() != df.height() {
            return Err(ModelError::IndexLength {
                index: index.len(),
                height: df.height(),
            });
        }
        Ok(Self { df, index })
    }

    /// Build a frame from columns with the default row index.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        Ok(Self::new(DataFrame::new(columns)?))
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.df.width()
    }

    /// The row index.
    #[inline]
    pub fn row_index(&self) -> &Series {
        &self.index
    }

    /// Column names, in table order, as a String series.
    pub fn column_names(&self) -> Series {
        let names: Vec<&str> = self
            .df
            .get_columns()
            .iter()
            .map(|column| column.name().as_str())
            .collect();
        Series::new(COLUMNS_SERIES_NAME.into(), names)
    }

    /// Check whether a column exists.
    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Get a column by name, returning `None` if it is absent.
    ///
    /// Cloning a Polars column only bumps reference counts.
    pub fn column(&self, name: &str) -> Option<IndexedColumn> {
        let column = self.df.column(name).ok()?;
        Some(IndexedColumn {
            column: column.clone(),
            index: self.index.clone(),
        })
    }
}

/// One column of a [`Frame`] together with the frame's row index.
#[derive(Debug, Clone)]
pub struct IndexedColumn {
    column: Column,
    index: Series,
}

impl IndexedColumn {
    /// Pair a standalone column with the default `0..N-1` index.
    pub fn new(column: Column) -> Self {
        let len = column.len() as i64;
        let index = Series::new(DEFAULT_INDEX_NAME.into(), (0..len).collect::<Vec<i64>>());
        Self { column, index }
    }

    /// Pair a column with an explicit index.
    pub fn with_index(column: Column, index: Series) -> Result<Self> {
        if index.len() != column.len() {
            return Err(ModelError::IndexLength {
                index: index.len(),
                height: column.len(),
            });
        }
        Ok(Self { column, index })
    }

    /// Column name.
    #[inline]
    pub fn name(&self) -> &str {
        self.column.name().as_str()
    }

    /// Declared element type.
    #[inline]
    pub fn dtype(&self) -> &DataType {
        self.column.dtype()
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.column.len()
    }

    /// Check if the column has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.column.len() == 0
    }

    /// Number of null cells (NaN is not null).
    #[inline]
    pub fn null_count(&self) -> usize {
        self.column.null_count()
    }

    /// Value at a row position; out-of-bounds reads yield `Null`.
    #[inline]
    pub fn get(&self, position: usize) -> AnyValue<'_> {
        self.column.get(position).unwrap_or(AnyValue::Null)
    }

    /// Iterate over `(position, value)` pairs in row order.
    pub fn values(&self) -> impl Iterator<Item = (usize, AnyValue<'_>)> + '_ {
        (0..self.len()).map(move |position| (position, self.get(position)))
    }

    /// Positions whose value satisfies `predicate`, in row order.
    pub fn positions_where<F>(&self, mut predicate: F) -> Vec<usize>
    where
        F: FnMut(&AnyValue<'_>) -> bool,
    {
        self.values()
            .filter_map(|(position, value)| predicate(&value).then_some(position))
            .collect()
    }

    /// Row label at a position.
    pub fn row_id(&self, position: usize) -> RowId {
        RowId::from_any(&self.index.get(position).unwrap_or(AnyValue::Null))
    }

    /// Row labels for positions, in order, with repeated labels dropped.
    pub fn row_ids(&self, positions: &[usize]) -> Vec<RowId> {
        let mut seen = HashSet::new();
        positions
            .iter()
            .map(|&position| self.row_id(position))
            .filter(|row| seen.insert(row.clone()))
            .collect()
    }
}
