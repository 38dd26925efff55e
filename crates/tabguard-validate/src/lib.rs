//! Composable validators for in-memory tables.
//!
//! This crate checks Polars-backed [`Frame`]s:
//!
//! - **Series validators**: type, numeric range, null/NaN, text length,
//!   ASCII encoding and caller predicates over a single column
//! - **Column validators**: bind a series validator to a column label and
//!   report missing required columns
//! - **Index validators**: size and element kind of the row index or of the
//!   column-name sequence
//! - **Table validators**: run all of the above in registration order under
//!   a fail-fast or aggregate [`Policy`]
//! - **Schemas**: the same rule sets described as JSON
//!
//! Every validator implements [`Validate`], so `is_valid` is always the
//! boolean view of `validate`.
//!
//! # Error Handling
//!
//! A rule breach is a [`ValidationError`] carrying the message, an optional
//! [`ErrorKind`], the column and the offending row labels. Table runs fail
//! with a [`TableError`]; schema loading fails with a [`SchemaError`].
//!
//! # Example
//!
//! ```
//! use polars::prelude::Column;
//! use tabguard_validate::{
//!     CharSeriesValidator, ColumnValidator, Frame, IntegerSeriesValidator, Policy,
//!     TableValidator, Validate,
//! };
//!
//! let frame = Frame::from_columns(vec![
//!     Column::new("age".into(), [31i64, 250]),
//!     Column::new("name".into(), ["Ada", "Grace"]),
//! ])
//! .unwrap();
//!
//! let validator = TableValidator::new()
//!     .with_policy(Policy::Aggregate)
//!     .column(ColumnValidator::new("age", IntegerSeriesValidator::new().max_value(120)))
//!     .column(ColumnValidator::new("name", CharSeriesValidator::new().max_length(10)));
//!
//! let err = validator.validate(&frame).unwrap_err();
//! assert_eq!(err.violations().len(), 1);
//! assert_eq!(err.violations()[0].column(), Some("age"));
//! ```

mod checks;
mod column;
mod error;
mod index;
mod report;
mod schema;
mod series;
mod table;
mod validator_trait;

pub use checks::{Bound, Check, Predicate};
pub use column::ColumnValidator;
pub use error::{ErrorKind, Result, SchemaError, TableError, ValidationError};
pub use index::IndexValidator;
pub use report::ValidationReport;
pub use schema::{ColumnRule, SeriesRule, TableSchema};
pub use series::{
    BaseSeriesValidator, CharSeriesValidator, EncodingSeriesValidator, FloatSeriesValidator,
    IntegerSeriesValidator, LambdaSeriesValidator, NumberSeriesValidator, SeriesChecks,
    SeriesValidator,
};
pub use table::{Policy, TableValidator};
pub use validator_trait::Validate;

// Re-export the model so callers need a single dependency
pub use tabguard_model::{ElementKind, Frame, IndexedColumn, RowId};
