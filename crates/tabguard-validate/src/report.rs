//! Collected violations of a table run.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ValidationError};

/// Violations in the order the table validator produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: ValidationError) {
        self.violations.push(violation);
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<ValidationError> {
        self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.violations.first()
    }

    /// Violations attributed to `column`.
    pub fn for_column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.violations
            .iter()
            .filter(move |violation| violation.column() == Some(column))
    }

    /// Kinds of the structured violations, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.violations
            .iter()
            .filter_map(ValidationError::kind)
            .collect()
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_queries() {
        let mut report = ValidationReport::new();
        assert!(report.is_empty());
        report.push(ValidationError::new(ErrorKind::OutOfRange, "a", "x"));
        report.push(ValidationError::basic("b"));
        report.push(ValidationError::new(ErrorKind::StringSize, "c", "y"));

        assert_eq!(report.len(), 3);
        assert_eq!(report.kinds(), [ErrorKind::OutOfRange, ErrorKind::StringSize]);
        assert_eq!(report.for_column("y").count(), 1);
        assert_eq!(report.first().map(ValidationError::message), Some("a"));
    }
}
