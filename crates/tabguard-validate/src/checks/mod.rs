//! Single-purpose check steps.
//!
//! Every series validator compiles to an ordered list of [`Check`]s. The
//! steps run in order and the first failing step wins, so a maximum-bound
//! violation is reported before the minimum bound is even evaluated.

mod encoding;
mod length;
mod nulls;
mod predicate;
mod range;
mod types;

use std::fmt;

use tabguard_model::{ElementKind, IndexedColumn};

use crate::error::ValidationError;

pub use predicate::Predicate;
pub use range::Bound;

/// One check step over a column.
#[derive(Debug, Clone)]
pub enum Check {
    /// Column dtype must satisfy the kind.
    Kind(ElementKind),
    /// Column must be text with no null cells.
    Text,
    /// No value may exceed the bound.
    MaxValue(Bound),
    /// No value may fall below the bound.
    MinValue(Bound),
    /// No value may be null or NaN.
    NotMissing,
    /// No text may be longer than this many characters.
    MaxLength(usize),
    /// No text may be shorter than this many characters.
    MinLength(usize),
    /// Every value must be 7-bit ASCII.
    Ascii,
    /// Caller predicate over the whole column.
    Predicate(Predicate),
}

impl Check {
    /// Run this step against a column.
    pub fn run(&self, column: &IndexedColumn) -> Result<(), ValidationError> {
        match self {
            Self::Kind(kind) => types::check_kind(column, *kind),
            Self::Text => types::check_text(column),
            Self::MaxValue(bound) => range::check_max(column, *bound),
            Self::MinValue(bound) => range::check_min(column, *bound),
            Self::NotMissing => nulls::check(column),
            Self::MaxLength(limit) => length::check_max(column, *limit),
            Self::MinLength(limit) => length::check_min(column, *limit),
            Self::Ascii => encoding::check(column),
            Self::Predicate(predicate) => predicate::check(column, predicate),
        }
    }

    /// Short step name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kind(_) => "kind",
            Self::Text => "text",
            Self::MaxValue(_) => "max_value",
            Self::MinValue(_) => "min_value",
            Self::NotMissing => "not_missing",
            Self::MaxLength(_) => "max_length",
            Self::MinLength(_) => "min_length",
            Self::Ascii => "ascii",
            Self::Predicate(_) => "predicate",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "kind({kind})"),
            Self::MaxValue(bound) | Self::MinValue(bound) => {
                write!(f, "{}({bound})", self.name())
            }
            Self::MaxLength(limit) | Self::MinLength(limit) => {
                write!(f, "{}({limit})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// Run steps in order, stopping at the first failure.
pub fn run_all(steps: &[Check], column: &IndexedColumn) -> Result<(), ValidationError> {
    for step in steps {
        if let Err(error) = step.run(column) {
            tracing::trace!(column = column.name(), step = %step, "check failed");
            return Err(error);
        }
    }
    Ok(())
}
