//! Element type checks.

use polars::prelude::{AnyValue, DataType};
use tabguard_model::{ElementKind, IndexedColumn};

use crate::error::{ErrorKind, ValidationError};

pub(crate) const DIFFERENT_TYPES: &str = "Series has the different type variables.";

/// Column dtype must satisfy `kind`.
pub(super) fn check_kind(column: &IndexedColumn, kind: ElementKind) -> Result<(), ValidationError> {
    if kind.matches(column.dtype()) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::DifferentTypes,
        DIFFERENT_TYPES,
        column.name(),
    ))
}

/// Every element must be text.
///
/// A non-String dtype fails without rows. A String column fails on its null
/// cells, which are listed as rows.
pub(super) fn check_text(column: &IndexedColumn) -> Result<(), ValidationError> {
    if !matches!(column.dtype(), DataType::String) {
        return Err(ValidationError::new(
            ErrorKind::DifferentTypes,
            DIFFERENT_TYPES,
            column.name(),
        ));
    }
    if column.null_count() == 0 {
        return Ok(());
    }

    let nulls = column.positions_where(|value| matches!(value, AnyValue::Null));
    Err(
        ValidationError::new(ErrorKind::DifferentTypes, DIFFERENT_TYPES, column.name())
            .with_rows(column.row_ids(&nulls)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};
    use tabguard_model::RowId;

    #[test]
    fn test_kind_mismatch_has_no_rows() {
        let column = IndexedColumn::new(Column::new("x".into(), [1i32, 2]));
        let err = check_kind(&column, ElementKind::Int64).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::DifferentTypes));
        assert_eq!(err.column(), Some("x"));
        assert!(err.rows().is_none());
        assert!(check_kind(&column, ElementKind::Integer).is_ok());
    }

    #[test]
    fn test_text_rejects_numbers() {
        let column = IndexedColumn::new(Column::new("x".into(), [1.0f64]));
        assert!(check_text(&column).is_err());
    }

    #[test]
    fn test_text_reports_null_rows() {
        let series = Series::new("x".into(), [Some("a"), None, Some("c")]);
        let column = IndexedColumn::new(series.into_column());
        let err = check_text(&column).unwrap_err();
        assert_eq!(err.rows(), Some(&[RowId::Int(1)][..]));
    }
}
