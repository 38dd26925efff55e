//! Schema loading and equivalence with the builder API.

use std::io::Write;

use polars::prelude::{Column, DataFrame};
use tabguard_validate::{
    CharSeriesValidator, ColumnValidator, Frame, IntegerSeriesValidator, Policy, SchemaError,
    TableSchema, TableValidator, Validate,
};

const SCHEMA: &str = r#"{
    "policy": "aggregate",
    "index": { "size": 3, "kind": "int64" },
    "columns": [
        { "label": "age", "type": "integer", "min_value": 0, "max_value": 100 },
        { "label": "name", "type": "char", "max_length": 5 },
        { "label": "note", "required": false, "type": "encoding" }
    ]
}"#;

fn frame() -> Frame {
    let df = DataFrame::new(vec![
        Column::new("age".into(), [0i64, 50, 999]),
        Column::new("name".into(), ["ok", "way too long", "fine"]),
    ])
    .expect("df");
    Frame::new(df)
}

#[test]
fn schema_matches_builder() {
    let from_schema = TableSchema::from_json_str(SCHEMA)
        .expect("schema")
        .build()
        .expect("validator");
    let from_builder = TableValidator::new()
        .with_policy(Policy::Aggregate)
        .column(ColumnValidator::new(
            "age",
            IntegerSeriesValidator::new().min_value(0).max_value(100),
        ))
        .column(ColumnValidator::new(
            "name",
            CharSeriesValidator::new().max_length(5),
        ));

    assert_eq!(from_schema.report(&frame()), from_builder.report(&frame()));
}

#[test]
fn schema_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(SCHEMA.as_bytes()).expect("write");

    let validator = TableSchema::from_path(file.path())
        .expect("schema")
        .build()
        .expect("validator");
    assert_eq!(validator.columns().len(), 3);
    assert!(!validator.is_valid(&frame()));
}

#[test]
fn missing_schema_file_reports_path() {
    let err = TableSchema::from_path("/nonexistent/tabguard/schema.json").unwrap_err();
    assert!(matches!(err, SchemaError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/tabguard/schema.json"));
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = TableSchema::from_json_str(r#"{"polcy": "aggregate"}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn misspelled_bound_key_fails_to_load() {
    let err =
        TableSchema::from_json_str(r#"{"columns":[{"label":"age","type":"integer","max":100}]}"#)
            .unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn bound_on_text_rule_fails_to_load() {
    let err = TableSchema::from_json_str(
        r#"{"columns":[{"label":"name","type":"char","max_value":100}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn violation_serializes_for_reports() {
    let validator = TableSchema::from_json_str(SCHEMA)
        .expect("schema")
        .build()
        .expect("validator");
    let report = validator.report(&frame());

    insta::assert_json_snapshot!(report.first(), @r#"
    {
      "message": "Series has the value greater than max.",
      "kind": "out_of_range",
      "column": "age",
      "rows": [
        2
      ]
    }
    "#);
}

#[test]
fn violation_messages() {
    let validator = TableSchema::from_json_str(SCHEMA)
        .expect("schema")
        .build()
        .expect("validator");
    let messages: Vec<String> = validator
        .report(&frame())
        .violations()
        .iter()
        .map(ToString::to_string)
        .collect();

    insta::assert_snapshot!(messages.join("\n"), @r"
    Series has the value greater than max. (column 'age')
    Series has the length greater than max. (column 'name')
    ");
}
