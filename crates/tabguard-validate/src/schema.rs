//! Declarative table schemas.
//!
//! A [`TableSchema`] describes a [`TableValidator`] as data so rule sets can
//! live in JSON files next to the tables they check:
//!
//! ```json
//! {
//!   "policy": "aggregate",
//!   "index": { "size": 3, "kind": "int64" },
//!   "columns": [
//!     { "label": "age", "type": "integer", "min_value": 0, "max_value": 120 },
//!     { "label": "name", "type": "char", "max_length": 40 },
//!     { "label": "note", "required": false, "type": "encoding" }
//!   ]
//! }
//! ```
//!
//! Predicates are code and cannot be expressed here; register a
//! [`LambdaSeriesValidator`](crate::LambdaSeriesValidator) on the built
//! validator instead.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabguard_model::ElementKind;

use crate::checks::Bound;
use crate::column::ColumnValidator;
use crate::error::{Result, SchemaError};
use crate::index::IndexValidator;
use crate::series::{
    BaseSeriesValidator, CharSeriesValidator, EncodingSeriesValidator, FloatSeriesValidator,
    IntegerSeriesValidator, NumberSeriesValidator, SeriesValidator,
};
use crate::table::{Policy, TableValidator};

/// A whole-table rule set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSchema {
    #[serde(default)]
    pub policy: Policy,

    /// Expectations on the row index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexValidator>,

    /// Expectations on the column-name sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_index: Option<IndexValidator>,

    /// Column rules, in evaluation order.
    #[serde(default)]
    pub columns: Vec<ColumnRule>,
}

/// Rule for one column.
///
/// The series rule keys sit beside `label` and `required`. Keys that the
/// rule's `type` does not define are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawColumnRule")]
pub struct ColumnRule {
    pub label: String,

    /// Whether the column must be present. Defaults to `true`.
    #[serde(default = "default_required")]
    pub required: bool,

    #[serde(flatten)]
    pub rule: SeriesRule,
}

fn default_required() -> bool {
    true
}

#[derive(Deserialize)]
struct RawColumnRule {
    label: String,
    #[serde(default = "default_required")]
    required: bool,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawColumnRule> for ColumnRule {
    type Error = serde_json::Error;

    fn try_from(raw: RawColumnRule) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            label: raw.label,
            required: raw.required,
            rule: serde_json::from_value(Value::Object(raw.rest))?,
        })
    }
}

/// Series validator configuration, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SeriesRule {
    Base {
        #[serde(default)]
        kind: Option<ElementKind>,
    },
    Integer {
        #[serde(default)]
        kind: Option<ElementKind>,
        #[serde(default)]
        min_value: Option<Bound>,
        #[serde(default)]
        max_value: Option<Bound>,
    },
    Float {
        #[serde(default)]
        kind: Option<ElementKind>,
        #[serde(default)]
        min_value: Option<Bound>,
        #[serde(default)]
        max_value: Option<Bound>,
    },
    Number {
        #[serde(default)]
        min_value: Option<Bound>,
        #[serde(default)]
        max_value: Option<Bound>,
    },
    Char {
        #[serde(default)]
        min_length: Option<usize>,
        #[serde(default)]
        max_length: Option<usize>,
    },
    Encoding {
        #[serde(default)]
        kind: Option<ElementKind>,
    },
}

impl SeriesRule {
    /// Reject bounds that no value could satisfy.
    fn check_bounds(&self, label: &str) -> Result<()> {
        match self {
            Self::Integer {
                min_value: Some(min),
                max_value: Some(max),
                ..
            }
            | Self::Float {
                min_value: Some(min),
                max_value: Some(max),
                ..
            }
            | Self::Number {
                min_value: Some(min),
                max_value: Some(max),
            } if min.exceeds(max) => Err(SchemaError::invalid(format!(
                "column '{label}': min_value {min} is greater than max_value {max}"
            ))),
            Self::Char {
                min_length: Some(min),
                max_length: Some(max),
            } if min > max => Err(SchemaError::invalid(format!(
                "column '{label}': min_length {min} is greater than max_length {max}"
            ))),
            _ => Ok(()),
        }
    }

    /// Compile to a series validator.
    pub fn to_validator(&self) -> SeriesValidator {
        match *self {
            Self::Base { kind } => {
                let mut validator = BaseSeriesValidator::new();
                if let Some(kind) = kind {
                    validator = validator.kind(kind);
                }
                validator.into()
            }
            Self::Integer {
                kind,
                min_value,
                max_value,
            } => {
                let mut validator = IntegerSeriesValidator::new();
                if let Some(kind) = kind {
                    validator = validator.kind(kind);
                }
                if let Some(bound) = min_value {
                    validator = validator.min_value(bound);
                }
                if let Some(bound) = max_value {
                    validator = validator.max_value(bound);
                }
                validator.into()
            }
            Self::Float {
                kind,
                min_value,
                max_value,
            } => {
                let mut validator = FloatSeriesValidator::new();
                if let Some(kind) = kind {
                    validator = validator.kind(kind);
                }
                if let Some(bound) = min_value {
                    validator = validator.min_value(bound);
                }
                if let Some(bound) = max_value {
                    validator = validator.max_value(bound);
                }
                validator.into()
            }
            Self::Number {
                min_value,
                max_value,
            } => {
                let mut validator = NumberSeriesValidator::new();
                if let Some(bound) = min_value {
                    validator = validator.min_value(bound);
                }
                if let Some(bound) = max_value {
                    validator = validator.max_value(bound);
                }
                validator.into()
            }
            Self::Char {
                min_length,
                max_length,
            } => {
                let mut validator = CharSeriesValidator::new();
                if let Some(length) = min_length {
                    validator = validator.min_length(length);
                }
                if let Some(length) = max_length {
                    validator = validator.max_length(length);
                }
                validator.into()
            }
            Self::Encoding { kind } => {
                let mut validator = EncodingSeriesValidator::new();
                if let Some(kind) = kind {
                    validator = validator.kind(kind);
                }
                validator.into()
            }
        }
    }
}

impl TableSchema {
    /// Parse a schema from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schema file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let schema = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            columns = schema.columns.len(),
            "loaded table schema"
        );
        Ok(schema)
    }

    /// Check the schema and build the validator it describes.
    pub fn build(&self) -> Result<TableValidator> {
        let mut labels = HashSet::new();
        for column in &self.columns {
            if !labels.insert(column.label.as_str()) {
                return Err(SchemaError::invalid(format!(
                    "column '{}' is listed more than once",
                    column.label
                )));
            }
            column.rule.check_bounds(&column.label)?;
        }

        let mut validator = TableValidator::new().with_policy(self.policy);
        if let Some(index) = self.index {
            validator = validator.with_index(index);
        }
        if let Some(columns_index) = self.columns_index {
            validator = validator.with_columns_index(columns_index);
        }
        for column in &self.columns {
            validator.push(
                ColumnValidator::new(column.label.as_str(), column.rule.to_validator())
                    .with_required(column.required),
            );
        }
        Ok(validator)
    }
}
