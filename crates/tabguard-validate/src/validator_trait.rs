//! The capability shared by every validator.

/// Something that can check a target and explain why it fails.
///
/// Series validators check an [`IndexedColumn`](tabguard_model::IndexedColumn),
/// column and table validators check a [`Frame`](tabguard_model::Frame), and
/// index validators check a Polars `Series`. Because they share this trait, a
/// table validator is built purely from its children's `validate` calls.
///
/// Implementations hold no per-call state: calling `validate` twice on the
/// same target yields the same result.
pub trait Validate<T: ?Sized> {
    /// Failure description returned by [`Validate::validate`].
    type Error;

    /// Check `target`, returning the first (or collected) violation.
    fn validate(&self, target: &T) -> Result<(), Self::Error>;

    /// Check `target` and reduce the outcome to a boolean.
    ///
    /// Any error, structured or not, means `false`.
    fn is_valid(&self, target: &T) -> bool {
        self.validate(target).is_ok()
    }
}
