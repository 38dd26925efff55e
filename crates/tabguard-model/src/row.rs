//! Row identifiers.

use std::fmt;

use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};
use tabguard_common::{any_to_i64, any_to_string};

/// Label of one row, read from the table's row index.
///
/// Integer indexes (the default `0..N-1`) yield [`RowId::Int`]; any other
/// index dtype is reported by its string rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Label(String),
}

impl RowId {
    /// Build a row identifier from an index cell.
    pub fn from_any(value: &AnyValue<'_>) -> Self {
        match any_to_i64(value) {
            Some(v) => Self::Int(v),
            None => Self::Label(any_to_string(value.clone())),
        }
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_any() {
        assert_eq!(RowId::from_any(&AnyValue::Int64(3)), RowId::Int(3));
        assert_eq!(RowId::from_any(&AnyValue::UInt32(9)), RowId::Int(9));
        assert_eq!(RowId::from_any(&AnyValue::String("r1")), RowId::from("r1"));
    }

    #[test]
    fn test_untagged_serialization() {
        let rows = vec![RowId::Int(2), RowId::from("b")];
        assert_eq!(serde_json::to_string(&rows).unwrap(), "[2,\"b\"]");
    }
}
