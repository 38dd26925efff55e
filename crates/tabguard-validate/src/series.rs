//! Series validators.
//!
//! Each validator is a small configuration struct that compiles to an
//! explicit, ordered list of [`Check`] steps:
//!
//! | Validator | Steps |
//! |-----------|-------|
//! | [`BaseSeriesValidator`] | kind? |
//! | [`IntegerSeriesValidator`] | kind, max?, min? |
//! | [`FloatSeriesValidator`] | kind, max?, min?, not-missing |
//! | [`NumberSeriesValidator`] | numeric kind, max?, min?, not-missing |
//! | [`CharSeriesValidator`] | text, max-length?, min-length? |
//! | [`EncodingSeriesValidator`] | kind?, ascii |
//! | [`LambdaSeriesValidator`] | predicate |
//!
//! The float and number validators reuse the integer validator's range
//! steps rather than re-implementing them.

use std::borrow::Cow;

use tabguard_model::{ElementKind, IndexedColumn};

use crate::checks::{self, Bound, Check, Predicate};
use crate::error::ValidationError;
use crate::validator_trait::Validate;

/// A configured series validator that knows its ordered check steps.
pub trait SeriesChecks {
    /// Short name of the validator flavour.
    fn flavor(&self) -> &'static str;

    /// Steps in evaluation order.
    fn steps(&self) -> Cow<'_, [Check]>;
}

impl<T: SeriesChecks> Validate<IndexedColumn> for T {
    type Error = ValidationError;

    fn validate(&self, column: &IndexedColumn) -> Result<(), ValidationError> {
        checks::run_all(&self.steps(), column)
    }
}

/// A compiled series validator: a flavour name and its check steps.
///
/// Column validators own one of these. Every configuration struct in this
/// module converts into it.
#[derive(Debug, Clone)]
pub struct SeriesValidator {
    flavor: &'static str,
    steps: Vec<Check>,
}

impl SeriesValidator {
    /// Compile any configured validator.
    pub fn compile(validator: &impl SeriesChecks) -> Self {
        Self {
            flavor: validator.flavor(),
            steps: validator.steps().into_owned(),
        }
    }
}

impl SeriesChecks for SeriesValidator {
    fn flavor(&self) -> &'static str {
        self.flavor
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        Cow::Borrowed(&self.steps)
    }
}

/// Type check only; without a declared kind it accepts any column.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseSeriesValidator {
    kind: Option<ElementKind>,
}

impl BaseSeriesValidator {
    /// An open validator with no declared kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the expected element kind.
    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl SeriesChecks for BaseSeriesValidator {
    fn flavor(&self) -> &'static str {
        "base"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        Cow::Owned(self.kind.map(Check::Kind).into_iter().collect())
    }
}

/// Type check plus inclusive range bounds.
#[derive(Debug, Clone, Copy)]
pub struct IntegerSeriesValidator {
    kind: ElementKind,
    min_value: Option<Bound>,
    max_value: Option<Bound>,
}

impl Default for IntegerSeriesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerSeriesValidator {
    /// Expects 64-bit signed integers, with no bounds.
    pub fn new() -> Self {
        Self {
            kind: ElementKind::Int64,
            min_value: None,
            max_value: None,
        }
    }

    /// Override the expected element kind.
    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn min_value(mut self, bound: impl Into<Bound>) -> Self {
        self.min_value = Some(bound.into());
        self
    }

    #[must_use]
    pub fn max_value(mut self, bound: impl Into<Bound>) -> Self {
        self.max_value = Some(bound.into());
        self
    }

    fn range_steps(&self) -> Vec<Check> {
        let mut steps = vec![Check::Kind(self.kind)];
        steps.extend(self.max_value.map(Check::MaxValue));
        steps.extend(self.min_value.map(Check::MinValue));
        steps
    }
}

impl SeriesChecks for IntegerSeriesValidator {
    fn flavor(&self) -> &'static str {
        "integer"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        Cow::Owned(self.range_steps())
    }
}

/// The integer pipeline over floats, followed by a null/NaN check.
#[derive(Debug, Clone, Copy)]
pub struct FloatSeriesValidator {
    range: IntegerSeriesValidator,
}

impl Default for FloatSeriesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatSeriesValidator {
    /// Expects 64-bit floats, with no bounds.
    pub fn new() -> Self {
        Self {
            range: IntegerSeriesValidator::new().kind(ElementKind::Float64),
        }
    }

    /// Override the expected element kind.
    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.range = self.range.kind(kind);
        self
    }

    #[must_use]
    pub fn min_value(mut self, bound: impl Into<Bound>) -> Self {
        self.range = self.range.min_value(bound);
        self
    }

    #[must_use]
    pub fn max_value(mut self, bound: impl Into<Bound>) -> Self {
        self.range = self.range.max_value(bound);
        self
    }
}

impl SeriesChecks for FloatSeriesValidator {
    fn flavor(&self) -> &'static str {
        "float"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        let mut steps = self.range.range_steps();
        steps.push(Check::NotMissing);
        Cow::Owned(steps)
    }
}

/// The float pipeline widened to any numeric column.
#[derive(Debug, Clone, Copy)]
pub struct NumberSeriesValidator {
    float: FloatSeriesValidator,
}

impl Default for NumberSeriesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSeriesValidator {
    pub fn new() -> Self {
        Self {
            float: FloatSeriesValidator::new().kind(ElementKind::Numeric),
        }
    }

    #[must_use]
    pub fn min_value(mut self, bound: impl Into<Bound>) -> Self {
        self.float = self.float.min_value(bound);
        self
    }

    #[must_use]
    pub fn max_value(mut self, bound: impl Into<Bound>) -> Self {
        self.float = self.float.max_value(bound);
        self
    }
}

impl SeriesChecks for NumberSeriesValidator {
    fn flavor(&self) -> &'static str {
        "number"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        self.float.steps()
    }
}

/// Text check plus length bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSeriesValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl CharSeriesValidator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }
}

impl SeriesChecks for CharSeriesValidator {
    fn flavor(&self) -> &'static str {
        "char"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        let mut steps = vec![Check::Text];
        steps.extend(self.max_length.map(Check::MaxLength));
        steps.extend(self.min_length.map(Check::MinLength));
        Cow::Owned(steps)
    }
}

/// Optional type check plus a 7-bit ASCII check.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingSeriesValidator {
    base: BaseSeriesValidator,
}

impl EncodingSeriesValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the expected element kind.
    #[must_use]
    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.base = self.base.kind(kind);
        self
    }
}

impl SeriesChecks for EncodingSeriesValidator {
    fn flavor(&self) -> &'static str {
        "encoding"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        let mut steps = self.base.steps().into_owned();
        steps.push(Check::Ascii);
        Cow::Owned(steps)
    }
}

/// A caller predicate over the whole column; no type check.
#[derive(Debug, Clone)]
pub struct LambdaSeriesValidator {
    predicate: Predicate,
}

impl LambdaSeriesValidator {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&IndexedColumn) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Predicate::new(function),
        }
    }

    /// Report failures as `predicate_failed` on the column instead of a
    /// basic violation.
    #[must_use]
    pub fn structured(mut self) -> Self {
        self.predicate = self.predicate.structured();
        self
    }
}

impl SeriesChecks for LambdaSeriesValidator {
    fn flavor(&self) -> &'static str {
        "lambda"
    }

    fn steps(&self) -> Cow<'_, [Check]> {
        Cow::Owned(vec![Check::Predicate(self.predicate.clone())])
    }
}

impl From<BaseSeriesValidator> for SeriesValidator {
    fn from(validator: BaseSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<IntegerSeriesValidator> for SeriesValidator {
    fn from(validator: IntegerSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<FloatSeriesValidator> for SeriesValidator {
    fn from(validator: FloatSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<NumberSeriesValidator> for SeriesValidator {
    fn from(validator: NumberSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<CharSeriesValidator> for SeriesValidator {
    fn from(validator: CharSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<EncodingSeriesValidator> for SeriesValidator {
    fn from(validator: EncodingSeriesValidator) -> Self {
        Self::compile(&validator)
    }
}

impl From<LambdaSeriesValidator> for SeriesValidator {
    fn from(validator: LambdaSeriesValidator) -> Self {
        Self {
            flavor: validator.flavor(),
            steps: vec![Check::Predicate(validator.predicate)],
        }
    }
}
