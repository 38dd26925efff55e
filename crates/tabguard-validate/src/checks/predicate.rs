//! Column-level predicate check.

use std::fmt;
use std::sync::Arc;

use tabguard_model::IndexedColumn;

use crate::error::{ErrorKind, ValidationError};

const PREDICATE_FALSE: &str = "Validator function returned false.";

type PredicateFn = dyn Fn(&IndexedColumn) -> bool + Send + Sync;

/// A caller predicate over a whole column.
///
/// The predicate decides at column granularity. By default a `false` result
/// is a basic violation; [`Predicate::structured`] attributes it to the
/// column with kind `predicate_failed` instead.
#[derive(Clone)]
pub struct Predicate {
    function: Arc<PredicateFn>,
    structured: bool,
}

impl Predicate {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&IndexedColumn) -> bool + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            structured: false,
        }
    }

    /// Report failures as `predicate_failed` on the column.
    #[must_use]
    pub fn structured(mut self) -> Self {
        self.structured = true;
        self
    }

    pub fn is_structured(&self) -> bool {
        self.structured
    }

    /// Evaluate the predicate.
    pub fn holds(&self, column: &IndexedColumn) -> bool {
        (self.function)(column)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("structured", &self.structured)
            .finish_non_exhaustive()
    }
}

pub(super) fn check(column: &IndexedColumn, predicate: &Predicate) -> Result<(), ValidationError> {
    if predicate.holds(column) {
        return Ok(());
    }
    if predicate.structured {
        return Err(ValidationError::new(
            ErrorKind::PredicateFailed,
            PREDICATE_FALSE,
            column.name(),
        ));
    }
    Err(ValidationError::basic(PREDICATE_FALSE))
}
