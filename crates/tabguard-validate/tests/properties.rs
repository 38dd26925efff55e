//! Property tests for range and length checks.

use polars::prelude::Column;
use proptest::prelude::*;
use tabguard_validate::{
    CharSeriesValidator, ErrorKind, IndexedColumn, IntegerSeriesValidator, RowId, Validate,
};

fn int_column(values: &[i64]) -> IndexedColumn {
    IndexedColumn::new(Column::new("n".into(), values))
}

proptest! {
    #[test]
    fn values_within_bounds_pass(
        (min, max, values) in (-1_000i64..1_000, 0i64..1_000).prop_flat_map(|(min, span)| {
            let max = min + span;
            (Just(min), Just(max), prop::collection::vec(min..=max, 0..50))
        })
    ) {
        let validator = IntegerSeriesValidator::new().min_value(min).max_value(max);
        prop_assert!(validator.is_valid(&int_column(&values)));
    }

    #[test]
    fn max_violations_are_exactly_the_values_above(
        values in prop::collection::vec(-500i64..500, 1..50),
        max in -500i64..500,
    ) {
        let expected: Vec<RowId> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > max)
            .map(|(i, _)| RowId::Int(i as i64))
            .collect();

        let result = IntegerSeriesValidator::new().max_value(max).validate(&int_column(&values));
        if expected.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.kind(), Some(ErrorKind::OutOfRange));
            prop_assert_eq!(err.rows(), Some(expected.as_slice()));
        }
    }

    #[test]
    fn length_violations_are_exactly_the_long_strings(
        values in prop::collection::vec("[a-z]{0,12}", 1..30),
        max_length in 0usize..12,
    ) {
        let column = IndexedColumn::new(Column::new("s".into(), values.as_slice()));
        let expected: Vec<RowId> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.chars().count() > max_length)
            .map(|(i, _)| RowId::Int(i as i64))
            .collect();

        let result = CharSeriesValidator::new().max_length(max_length).validate(&column);
        match result {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => {
                prop_assert_eq!(err.kind(), Some(ErrorKind::StringSize));
                prop_assert_eq!(err.rows(), Some(expected.as_slice()));
            }
        }
    }

    #[test]
    fn validate_is_idempotent(values in prop::collection::vec(any::<i64>(), 0..40)) {
        let validator = IntegerSeriesValidator::new().min_value(-10).max_value(10);
        let column = int_column(&values);
        prop_assert_eq!(validator.validate(&column), validator.validate(&column));
    }
}
