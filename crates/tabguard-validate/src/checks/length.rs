//! Text length checks.
//!
//! Lengths count Unicode scalar values. Non-text cells are ignored here; the
//! text step that precedes these checks rejects them.

use tabguard_common::text_len;
use tabguard_model::IndexedColumn;

use crate::error::{ErrorKind, ValidationError};

const LONGER_THAN_MAX: &str = "Series has the length greater than max.";
const SHORTER_THAN_MIN: &str = "Series has the length smaller than min.";

pub(super) fn check_max(column: &IndexedColumn, limit: usize) -> Result<(), ValidationError> {
    let positions = column.positions_where(|value| text_len(value).is_some_and(|n| n > limit));
    report(column, &positions, LONGER_THAN_MAX)
}

pub(super) fn check_min(column: &IndexedColumn, limit: usize) -> Result<(), ValidationError> {
    let positions = column.positions_where(|value| text_len(value).is_some_and(|n| n < limit));
    report(column, &positions, SHORTER_THAN_MIN)
}

fn report(column: &IndexedColumn, positions: &[usize], message: &str) -> Result<(), ValidationError> {
    if positions.is_empty() {
        return Ok(());
    }
    Err(
        ValidationError::new(ErrorKind::StringSize, message, column.name())
            .with_rows(column.row_ids(positions)),
    )
}
