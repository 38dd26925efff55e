//! Table model consumed by the tabguard validators.
//!
//! The validators never load or build data themselves. They are handed a
//! [`Frame`]: a Polars `DataFrame` paired with a row index whose labels are
//! used to report offending rows.
//!
//! # Module Organization
//!
//! - [`frame`]: [`Frame`] and [`IndexedColumn`]
//! - [`kind`]: [`ElementKind`], the declared element type of a column or index
//! - [`row`]: [`RowId`], a single row identifier
//! - [`error`]: [`ModelError`]

pub mod error;
pub mod frame;
pub mod kind;
pub mod row;

pub use error::{ModelError, Result};
pub use frame::{Frame, IndexedColumn};
pub use kind::ElementKind;
pub use row::RowId;
