//! Shared utilities for tabguard crates.
//!
//! This crate provides the Polars `AnyValue` helpers used by the table model
//! and the validators: string rendering, numeric widening and missing-value
//! detection.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    any_is_missing, any_to_f64, any_to_i64, any_to_string, format_numeric, text_len,
};
