//! Declared element kinds.

use std::fmt;

use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

/// Element kind a validator expects a column (or an index) to hold.
///
/// The set is closed so configuration files and callers share one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Exactly 64-bit signed integers.
    Int64,
    /// Exactly 64-bit floats.
    Float64,
    /// Any signed or unsigned integer width.
    Integer,
    /// Any float width.
    Float,
    /// Any integer or float.
    Numeric,
    /// UTF-8 text.
    Text,
    /// Booleans.
    Boolean,
}

impl ElementKind {
    /// Check whether a Polars dtype satisfies this kind.
    #[must_use]
    pub fn matches(&self, dtype: &DataType) -> bool {
        match self {
            Self::Int64 => matches!(dtype, DataType::Int64),
            Self::Float64 => matches!(dtype, DataType::Float64),
            Self::Integer => is_integer(dtype),
            Self::Float => is_float(dtype),
            Self::Numeric => is_integer(dtype) || is_float(dtype),
            Self::Text => matches!(dtype, DataType::String),
            Self::Boolean => matches!(dtype, DataType::Boolean),
        }
    }

    /// Snake-case tag, as used in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Numeric => "numeric",
            Self::Text => "text",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_integer(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn is_float(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}
