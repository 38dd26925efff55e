//! Index and shape validation.
//!
//! The same validator checks a table's row index and its column-name
//! sequence; only the target differs.

use polars::prelude::Series;
use serde::{Deserialize, Serialize};
use tabguard_model::ElementKind;

use crate::error::ValidationError;
use crate::validator_trait::Validate;

const DIFFERENT_SIZE: &str = "Index has the different size.";
const DIFFERENT_TYPE: &str = "Index has the different type.";

/// Expected length and/or element kind of an index-like series.
///
/// Unset expectations are skipped. Failures are basic violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<ElementKind>,
}

impl IndexValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect exactly `size` entries.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Expect entries of `kind`.
    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn expected_size(&self) -> Option<usize> {
        self.size
    }

    pub fn expected_kind(&self) -> Option<ElementKind> {
        self.kind
    }
}

impl Validate<Series> for IndexValidator {
    type Error = ValidationError;

    fn validate(&self, index: &Series) -> Result<(), ValidationError> {
        if let Some(size) = self.size
            && index.len() != size
        {
            return Err(ValidationError::basic(DIFFERENT_SIZE));
        }
        if let Some(kind) = self.kind
            && !kind.matches(index.dtype())
        {
            return Err(ValidationError::basic(DIFFERENT_TYPE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    fn index() -> Series {
        Series::new("index".into(), [0i64, 1, 2])
    }

    #[test]
    fn test_size() {
        let err = IndexValidator::new().size(5).validate(&index()).unwrap_err();
        assert_eq!(err.message(), DIFFERENT_SIZE);
        assert!(!err.is_structured());
        assert!(IndexValidator::new().size(3).is_valid(&index()));
        assert!(IndexValidator::new().is_valid(&index()));
    }

    #[test]
    fn test_kind() {
        let err = IndexValidator::new()
            .kind(ElementKind::Text)
            .validate(&index())
            .unwrap_err();
        assert_eq!(err.message(), DIFFERENT_TYPE);
        assert!(IndexValidator::new().kind(ElementKind::Int64).is_valid(&index()));
    }

    #[test]
    fn test_size_checked_before_kind() {
        let validator = IndexValidator::new().size(1).kind(ElementKind::Text);
        assert_eq!(validator.validate(&index()).unwrap_err().message(), DIFFERENT_SIZE);
    }

    #[test]
    fn test_column_names() {
        let names = Series::new("columns".into(), ["a", "b"]);
        let validator = IndexValidator::new().size(2).kind(ElementKind::Text);
        assert!(validator.is_valid(&names));
    }
}
