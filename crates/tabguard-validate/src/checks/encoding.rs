//! ASCII encoding check.

use polars::prelude::AnyValue;
use tabguard_common::any_to_string;
use tabguard_model::IndexedColumn;

use crate::error::{ErrorKind, ValidationError};

const NOT_ASCII: &str = "Series has non-ASCII characters.";

/// Every value must be plain 7-bit text. Nulls pass; non-text values are
/// checked on their string rendering.
pub(super) fn check(column: &IndexedColumn) -> Result<(), ValidationError> {
    let positions = column.positions_where(|value| !is_ascii(value));
    if positions.is_empty() {
        return Ok(());
    }
    Err(
        ValidationError::new(ErrorKind::EncodingError, NOT_ASCII, column.name())
            .with_rows(column.row_ids(&positions)),
    )
}

fn is_ascii(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.is_ascii(),
        AnyValue::StringOwned(s) => s.is_ascii(),
        other => any_to_string(other.clone()).is_ascii(),
    }
}
