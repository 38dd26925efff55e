//! Table validation.
//!
//! A [`TableValidator`] runs, in order: the row index check, the column-name
//! check, then each registered [`ColumnValidator`] in registration order. The
//! [`Policy`] decides whether the first violation stops the run.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabguard_model::Frame;
use tracing::{debug, trace};

use crate::column::ColumnValidator;
use crate::error::TableError;
use crate::index::IndexValidator;
use crate::report::ValidationReport;
use crate::validator_trait::Validate;

/// How a table run reacts to a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Stop at the first violation; later validators do not run.
    #[default]
    FailFast,
    /// Run every validator and report all violations together.
    Aggregate,
}

impl Policy {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FailFast => "fail_fast",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered collection of column validators with optional shape checks.
#[derive(Debug, Clone, Default)]
pub struct TableValidator {
    policy: Policy,
    index: Option<IndexValidator>,
    columns_index: Option<IndexValidator>,
    columns: Vec<ColumnValidator>,
}

impl TableValidator {
    /// An empty fail-fast validator.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the row index.
    #[must_use]
    pub fn with_index(mut self, validator: IndexValidator) -> Self {
        self.index = Some(validator);
        self
    }

    /// Check the column-name sequence.
    #[must_use]
    pub fn with_columns_index(mut self, validator: IndexValidator) -> Self {
        self.columns_index = Some(validator);
        self
    }

    /// Register a column validator after the existing ones.
    #[must_use]
    pub fn column(mut self, validator: ColumnValidator) -> Self {
        self.columns.push(validator);
        self
    }

    /// Register a column validator in place.
    pub fn push(&mut self, validator: ColumnValidator) {
        self.columns.push(validator);
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn columns(&self) -> &[ColumnValidator] {
        &self.columns
    }

    /// Run under the configured policy and return what was found.
    ///
    /// In fail-fast mode the report holds at most one violation.
    pub fn report(&self, frame: &Frame) -> ValidationReport {
        let fail_fast = self.policy == Policy::FailFast;
        debug!(
            policy = %self.policy,
            rows = frame.height(),
            columns = self.columns.len(),
            "validating table"
        );

        let mut report = ValidationReport::new();
        let shape_checks = [
            (self.index.as_ref(), frame.row_index().clone()),
            (self.columns_index.as_ref(), frame.column_names()),
        ];
        for (validator, target) in shape_checks {
            let Some(validator) = validator else {
                continue;
            };
            if let Err(violation) = validator.validate(&target) {
                trace!(series = %target.name(), %violation, "shape check failed");
                report.push(violation);
                if fail_fast {
                    return finish(report);
                }
            }
        }

        for column in &self.columns {
            match column.validate(frame) {
                Ok(()) => trace!(column = column.label(), "column passed"),
                Err(violation) => {
                    trace!(column = column.label(), %violation, "column failed");
                    report.push(violation);
                    if fail_fast {
                        break;
                    }
                }
            }
        }
        finish(report)
    }
}

fn finish(report: ValidationReport) -> ValidationReport {
    debug!(violations = report.len(), "table validation finished");
    report
}

impl Validate<Frame> for TableValidator {
    type Error = TableError;

    fn validate(&self, frame: &Frame) -> Result<(), TableError> {
        let report = self.report(frame);
        match self.policy {
            Policy::FailFast => match report.into_violations().into_iter().next() {
                Some(violation) => Err(TableError::Violation(violation)),
                None => Ok(()),
            },
            Policy::Aggregate if report.is_empty() => Ok(()),
            Policy::Aggregate => Err(TableError::Aggregate(report)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;
    use tabguard_model::{ElementKind, RowId};

    use crate::error::ErrorKind;
    use crate::series::{CharSeriesValidator, IntegerSeriesValidator};

    fn frame() -> Frame {
        Frame::from_columns(vec![
            Column::new("age".into(), [0i64, 50, 999]),
            Column::new("name".into(), ["ok", "way too long", "fine"]),
        ])
        .expect("frame")
    }

    fn two_failures(policy: Policy) -> TableValidator {
        TableValidator::new()
            .with_policy(policy)
            .column(ColumnValidator::new(
                "age",
                IntegerSeriesValidator::new().max_value(100),
            ))
            .column(ColumnValidator::new(
                "name",
                CharSeriesValidator::new().max_length(5),
            ))
    }

    #[test]
    fn test_fail_fast_stops_at_first() {
        let err = two_failures(Policy::FailFast).validate(&frame()).unwrap_err();
        let TableError::Violation(violation) = err else {
            panic!("expected a single violation");
        };
        assert_eq!(violation.column(), Some("age"));
    }

    #[test]
    fn test_aggregate_collects_all_without_mixing() {
        let err = two_failures(Policy::Aggregate).validate(&frame()).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].column(), Some("age"));
        assert_eq!(violations[0].kind(), Some(ErrorKind::OutOfRange));
        assert_eq!(violations[0].rows(), Some(&[RowId::Int(2)][..]));
        assert_eq!(violations[1].column(), Some("name"));
        assert_eq!(violations[1].kind(), Some(ErrorKind::StringSize));
        assert_eq!(violations[1].rows(), Some(&[RowId::Int(1)][..]));
    }

    #[test]
    fn test_shape_checks_run_first() {
        let validator = two_failures(Policy::Aggregate)
            .with_index(IndexValidator::new().size(5))
            .with_columns_index(IndexValidator::new().kind(ElementKind::Int64));
        let report = validator.report(&frame());
        assert_eq!(report.len(), 4);
        assert!(!report.violations()[0].is_structured());
        assert!(!report.violations()[1].is_structured());
    }

    #[test]
    fn test_empty_validator_accepts_any_table() {
        assert!(TableValidator::new().is_valid(&frame()));
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(Policy::default(), Policy::FailFast);
        assert_eq!(Policy::Aggregate.to_string(), "aggregate");
    }
}
