//! Numeric range checks.
//!
//! Bounds are inclusive: only values strictly above the maximum or strictly
//! below the minimum are violations. Every violating row is collected.

use std::cmp::Ordering;
use std::fmt;

use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};
use tabguard_common::{any_to_f64, any_to_i64, format_numeric};
use tabguard_model::IndexedColumn;

use crate::error::{ErrorKind, ValidationError};

const GREATER_THAN_MAX: &str = "Series has the value greater than max.";
const SMALLER_THAN_MIN: &str = "Series has the value smaller than min.";

/// A numeric bound.
///
/// Integer bounds compare integer cells exactly; everything else compares as
/// `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Int(i64),
    Float(f64),
}

impl Bound {
    /// The bound widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Order a cell relative to this bound.
    ///
    /// Returns `None` for nulls, NaN and non-numeric cells, which never
    /// violate a range.
    pub fn compare(&self, value: &AnyValue<'_>) -> Option<Ordering> {
        if let Self::Int(bound) = *self
            && let Some(v) = any_to_i64(value)
        {
            return Some(v.cmp(&bound));
        }
        any_to_f64(value)?.partial_cmp(&self.as_f64())
    }

    /// Check whether this bound lies strictly above `other`.
    ///
    /// Two integer bounds compare exactly.
    pub fn exceeds(&self, other: &Bound) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a > b,
            _ => self.as_f64() > other.as_f64(),
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_numeric(*v)),
        }
    }
}

pub(super) fn check_max(column: &IndexedColumn, bound: Bound) -> Result<(), ValidationError> {
    check_side(column, bound, Ordering::Greater, GREATER_THAN_MAX)
}

pub(super) fn check_min(column: &IndexedColumn, bound: Bound) -> Result<(), ValidationError> {
    check_side(column, bound, Ordering::Less, SMALLER_THAN_MIN)
}

fn check_side(
    column: &IndexedColumn,
    bound: Bound,
    violating: Ordering,
    message: &str,
) -> Result<(), ValidationError> {
    let positions = column.positions_where(|value| bound.compare(value) == Some(violating));
    if positions.is_empty() {
        return Ok(());
    }
    Err(
        ValidationError::new(ErrorKind::OutOfRange, message, column.name())
            .with_rows(column.row_ids(&positions)),
    )
}
