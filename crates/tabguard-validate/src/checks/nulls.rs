//! Empty-field check (null or NaN).

use tabguard_common::any_is_missing;
use tabguard_model::IndexedColumn;

use crate::error::{ErrorKind, ValidationError};

const EMPTY_FIELD: &str = "Series has the empty field.";

/// No cell may be null or NaN; every such row is reported.
pub(super) fn check(column: &IndexedColumn) -> Result<(), ValidationError> {
    let positions = column.positions_where(any_is_missing);
    if positions.is_empty() {
        return Ok(());
    }
    Err(
        ValidationError::new(ErrorKind::EmptyField, EMPTY_FIELD, column.name())
            .with_rows(column.row_ids(&positions)),
    )
}
