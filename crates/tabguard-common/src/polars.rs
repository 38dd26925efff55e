//! Cell-level conversions over Polars `AnyValue`.
//!
//! Validators read cells one at a time through `Column::get`, so every check
//! works on `AnyValue`. These helpers centralise the conversions they need.

use polars::prelude::AnyValue;

/// Renders a cell the way it is shown in a violation or checked for encoding.
///
/// Nulls render empty, booleans as `true`/`false`, floats through
/// [`format_numeric`]. Anything else uses its Polars display text without
/// enclosing quotes.
///
/// ```
/// use polars::prelude::AnyValue;
/// use tabguard_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::UInt16(7)), "7");
/// assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
/// assert_eq!(any_to_string(AnyValue::String("Zürich")), "Zürich");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    if let Some(v) = any_to_i64(&value) {
        return v.to_string();
    }
    match value {
        AnyValue::Null => String::new(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_owned(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let text = other.to_string();
            match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
                Some(inner) => inner.to_owned(),
                None => text,
            }
        }
    }
}

/// Shortest decimal text for a float: `40.0` becomes `40`, `1.50` becomes
/// `1.5`.
///
/// ```
/// use tabguard_common::format_numeric;
///
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let text = v.to_string();
    if !text.contains('.') {
        return text;
    }
    match text.trim_end_matches('0').trim_end_matches('.') {
        "" | "-" => "0".to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

/// Widens a numeric `AnyValue` to `f64`.
///
/// Returns `None` for nulls and for non-numeric values. Text is never parsed:
/// a range bound applies to numbers, not to their spelling.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match *value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}

/// Converts an integer `AnyValue` to `i64`.
///
/// Returns `None` for nulls, floats, text and unsigned values above `i64::MAX`.
pub fn any_to_i64(value: &AnyValue<'_>) -> Option<i64> {
    match *value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        _ => None,
    }
}

/// Returns true for `Null` and for floating-point `NaN`.
pub fn any_is_missing(value: &AnyValue<'_>) -> bool {
    match *value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        _ => false,
    }
}

/// Length of a text value in Unicode scalar values.
///
/// Returns `None` when the value is not text.
pub fn text_len(value: &AnyValue<'_>) -> Option<usize> {
    match value {
        AnyValue::String(s) => Some(s.chars().count()),
        AnyValue::StringOwned(s) => Some(s.chars().count()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(2.25)), "2.25");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
    }

    #[test]
    fn test_any_to_string_wide_unsigned() {
        assert_eq!(any_to_string(AnyValue::UInt64(u64::MAX)), u64::MAX.to_string());
    }

    #[test]
    fn test_format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(10.50), "10.5");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(&AnyValue::Null), None);
        assert_eq!(any_to_f64(&AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(&AnyValue::Float64(3.5)), Some(3.5));
        assert_eq!(any_to_f64(&AnyValue::String("2.5")), None);
    }

    #[test]
    fn test_any_to_i64() {
        assert_eq!(any_to_i64(&AnyValue::UInt64(7)), Some(7));
        assert_eq!(any_to_i64(&AnyValue::UInt64(u64::MAX)), None);
        assert_eq!(any_to_i64(&AnyValue::Float64(3.0)), None);
    }

    #[test]
    fn test_any_is_missing() {
        assert!(any_is_missing(&AnyValue::Null));
        assert!(any_is_missing(&AnyValue::Float64(f64::NAN)));
        assert!(any_is_missing(&AnyValue::Float32(f32::NAN)));
        assert!(!any_is_missing(&AnyValue::Float64(0.0)));
        assert!(!any_is_missing(&AnyValue::String("")));
    }

    #[test]
    fn test_text_len_counts_chars() {
        assert_eq!(text_len(&AnyValue::String("abc")), Some(3));
        assert_eq!(text_len(&AnyValue::String("żółw")), Some(4));
        assert_eq!(text_len(&AnyValue::Int32(5)), None);
    }
}
