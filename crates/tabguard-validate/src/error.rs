//! Error types for the tabguard-validate crate.
//!
//! A [`ValidationError`] is both the failure signal returned by every
//! validator and the diagnostic describing the failure. Structured errors
//! carry an [`ErrorKind`], the column and the offending rows; basic errors
//! carry only a message (shape checks and column-level predicates).

use std::fmt;

use serde::{Deserialize, Serialize};
use tabguard_model::RowId;
use thiserror::Error;

use crate::report::ValidationReport;

/// Closed set of structured violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Column element type differs from the declared kind.
    DifferentTypes,
    /// A value lies above the maximum or below the minimum.
    OutOfRange,
    /// A value is null or NaN.
    EmptyField,
    /// A text value is longer or shorter than allowed.
    StringSize,
    /// A value contains characters outside 7-bit ASCII.
    EncodingError,
    /// A required column is absent from the table.
    RequiredFieldError,
    /// A column-level predicate returned false.
    PredicateFailed,
}

impl ErrorKind {
    /// Snake-case tag of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DifferentTypes => "different_types",
            Self::OutOfRange => "out_of_range",
            Self::EmptyField => "empty_field",
            Self::StringSize => "string_size",
            Self::EncodingError => "encoding_error",
            Self::RequiredFieldError => "required_field_error",
            Self::PredicateFailed => "predicate_failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule violation.
///
/// Invariant: `rows`, when present, is non-empty, ordered and duplicate-free.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}{}", column_suffix(.column))]
pub struct ValidationError {
    message: String,
    kind: Option<ErrorKind>,
    column: Option<String>,
    rows: Option<Vec<RowId>>,
}

fn column_suffix(column: &Option<String>) -> String {
    match column {
        Some(name) => format!(" (column '{name}')"),
        None => String::new(),
    }
}

impl ValidationError {
    /// Create a structured violation attributed to a column.
    pub fn new(kind: ErrorKind, message: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Some(kind),
            column: Some(column.into()),
            rows: None,
        }
    }

    /// Create an unstructured violation that only carries a message.
    pub fn basic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            column: None,
            rows: None,
        }
    }

    /// Attach the offending rows. An empty list leaves `rows` unset.
    #[must_use]
    pub fn with_rows(mut self, rows: Vec<RowId>) -> Self {
        self.rows = (!rows.is_empty()).then_some(rows);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn rows(&self) -> Option<&[RowId]> {
        self.rows.as_deref()
    }

    /// Check if this violation carries a kind (as opposed to a basic one).
    pub fn is_structured(&self) -> bool {
        self.kind.is_some()
    }
}

/// Failure of a whole-table validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Fail-fast policy: the first violation found.
    #[error(transparent)]
    Violation(ValidationError),

    /// Aggregate policy: every violation, in registration order.
    #[error("Table has {} violation(s)", .0.len())]
    Aggregate(ValidationReport),
}

impl TableError {
    /// All violations carried by this error, in order.
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            Self::Violation(error) => std::slice::from_ref(error),
            Self::Aggregate(report) => report.violations(),
        }
    }
}

/// Errors raised while loading or building a [`TableSchema`](crate::TableSchema).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchemaError {
    /// Failed to read a schema file.
    #[error("Failed to read schema '{path}': {source}")]
    Read {
        /// File path that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Schema text is not valid JSON for the schema model.
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema parsed but describes an impossible rule set.
    #[error("Invalid schema configuration: {message}")]
    InvalidConfig {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

impl SchemaError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
