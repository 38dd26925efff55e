//! Column validators.
//!
//! A [`ColumnValidator`] binds a series validator to a column label. It is
//! the only place that tests whether a column is present: series validators
//! never see a missing column.

use tabguard_model::Frame;

use crate::error::{ErrorKind, ValidationError};
use crate::series::{SeriesChecks, SeriesValidator};
use crate::validator_trait::Validate;

const REQUIRED_MISSING: &str = "Required column is missing.";

/// A series validator applied to one named column of a table.
#[derive(Debug, Clone)]
pub struct ColumnValidator {
    label: String,
    required: bool,
    series: SeriesValidator,
}

impl ColumnValidator {
    /// Validate the column `label`, which must be present.
    pub fn new(label: impl Into<String>, series: impl Into<SeriesValidator>) -> Self {
        Self {
            label: label.into(),
            required: true,
            series: series.into(),
        }
    }

    /// Accept tables where the column is absent.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set whether the column must be present.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The wrapped series validator.
    pub fn series(&self) -> &SeriesValidator {
        &self.series
    }
}

impl Validate<Frame> for ColumnValidator {
    type Error = ValidationError;

    fn validate(&self, frame: &Frame) -> Result<(), ValidationError> {
        let Some(column) = frame.column(&self.label) else {
            if self.required {
                return Err(ValidationError::new(
                    ErrorKind::RequiredFieldError,
                    REQUIRED_MISSING,
                    self.label.as_str(),
                ));
            }
            tracing::debug!(column = %self.label, "optional column absent, skipping");
            return Ok(());
        };

        tracing::trace!(
            column = %self.label,
            flavor = self.series.flavor(),
            steps = self.series.steps().len(),
            "validating column"
        );
        self.series.validate(&column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;
    use tabguard_model::RowId;

    use crate::series::{CharSeriesValidator, IntegerSeriesValidator};

    fn frame() -> Frame {
        Frame::from_columns(vec![
            Column::new("age".into(), [0i64, 50, 999]),
            Column::new("name".into(), ["ok", "way too long", "fine"]),
        ])
        .expect("frame")
    }

    #[test]
    fn test_missing_required_column() {
        let validator = ColumnValidator::new("weight", IntegerSeriesValidator::new());
        let err = validator.validate(&frame()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RequiredFieldError));
        assert_eq!(err.column(), Some("weight"));
        assert!(err.rows().is_none());
        assert_eq!(err.message(), REQUIRED_MISSING);
    }

    #[test]
    fn test_missing_optional_column_passes() {
        let validator = ColumnValidator::new("weight", IntegerSeriesValidator::new()).optional();
        assert!(!validator.is_required());
        assert!(validator.is_valid(&frame()));
    }

    #[test]
    fn test_present_column_delegates() {
        let validator = ColumnValidator::new("age", IntegerSeriesValidator::new().max_value(100));
        let err = validator.validate(&frame()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::OutOfRange));
        assert_eq!(err.column(), Some("age"));
        assert_eq!(err.rows(), Some(&[RowId::Int(2)][..]));
    }

    #[test]
    fn test_optional_present_column_is_still_checked() {
        let validator =
            ColumnValidator::new("name", CharSeriesValidator::new().max_length(5)).optional();
        let err = validator.validate(&frame()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::StringSize));
        assert_eq!(err.rows(), Some(&[RowId::Int(1)][..]));
    }
}
