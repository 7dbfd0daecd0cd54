//! Caller-supplied label data and its shape at the call boundary.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Argument, GradeplotError, Result, ValidationError};

/// A single raw label value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Scalar {
    /// Coerce the value to the text used for catalog matching.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            Scalar::Boolean(true) => "TRUE".to_string(),
            Scalar::Boolean(false) => "FALSE".to_string(),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Boolean(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Integer)
                .or_else(|| n.as_f64().map(Scalar::Float)),
            Value::Null => Some(Scalar::Text("NA".to_string())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

/// Multi-column data. Accepted at the boundary only so it can be rejected
/// with a precise reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Scalar>>,
}

impl LabelTable {
    /// Create a new table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Shape of the raw label argument.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum LabelInput {
    /// Nothing was supplied.
    #[default]
    Absent,
    /// A flat sequence of scalars.
    Flat(Vec<Scalar>),
    /// A table of one or more columns.
    Tabular(LabelTable),
}

impl LabelInput {
    /// Build a flat input from anything convertible to scalars.
    pub fn flat<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        LabelInput::Flat(values.into_iter().map(Into::into).collect())
    }

    /// Parse a JSON document into an input shape.
    ///
    /// `null` is absent, a scalar or an array of scalars is flat, and an
    /// array of arrays/objects or an object of columns is tabular.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(GradeplotError::Json)?;
        Ok(Self::from_json_value(&value))
    }

    fn from_json_value(value: &Value) -> Self {
        match value {
            Value::Null => LabelInput::Absent,
            Value::Array(items) => {
                let scalars: Option<Vec<Scalar>> = items.iter().map(Scalar::from_json).collect();
                match scalars {
                    Some(values) => LabelInput::Flat(values),
                    None => LabelInput::Tabular(table_from_rows(items)),
                }
            }
            Value::Object(columns) => LabelInput::Tabular(table_from_columns(columns)),
            scalar => LabelInput::Flat(Scalar::from_json(scalar).into_iter().collect()),
        }
    }

    /// Check that the input is a non-empty flat sequence and borrow it.
    pub fn validate(&self) -> std::result::Result<&[Scalar], ValidationError> {
        match self {
            LabelInput::Absent => Err(ValidationError::MissingInput {
                arguments: vec![Argument::Values],
            }),
            LabelInput::Flat(values) if values.is_empty() => Err(ValidationError::WrongFormat {
                arguments: vec![Argument::Values],
            }),
            LabelInput::Flat(values) => Ok(values.as_slice()),
            LabelInput::Tabular(_) => Err(ValidationError::WrongFormat {
                arguments: vec![Argument::Values],
            }),
        }
    }

    /// Whether the input was supplied at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, LabelInput::Absent)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for LabelInput {
    fn from(values: Vec<T>) -> Self {
        LabelInput::flat(values)
    }
}

impl<T: Into<Scalar>> From<Option<Vec<T>>> for LabelInput {
    fn from(values: Option<Vec<T>>) -> Self {
        values.map_or(LabelInput::Absent, LabelInput::flat)
    }
}

impl From<LabelTable> for LabelInput {
    fn from(table: LabelTable) -> Self {
        LabelInput::Tabular(table)
    }
}

fn cell(value: &Value) -> Scalar {
    Scalar::from_json(value).unwrap_or_else(|| Scalar::Text(value.to_string()))
}

fn table_from_rows(items: &[Value]) -> LabelTable {
    let mut headers: Vec<String> = Vec::new();
    let mut records: Vec<IndexMap<String, Scalar>> = Vec::with_capacity(items.len());

    for item in items {
        let mut record = IndexMap::new();
        match item {
            Value::Array(cells) => {
                for (idx, value) in cells.iter().enumerate() {
                    record.insert(format!("V{}", idx + 1), cell(value));
                }
            }
            Value::Object(fields) => {
                for (key, value) in fields {
                    record.insert(key.clone(), cell(value));
                }
            }
            other => {
                record.insert("V1".to_string(), cell(other));
            }
        }
        for key in record.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        records.push(record);
    }

    let rows = records
        .into_iter()
        .map(|record| {
            headers
                .iter()
                .map(|h| record.get(h).cloned().unwrap_or_else(|| Scalar::Text("NA".to_string())))
                .collect()
        })
        .collect();

    LabelTable::new(headers, rows)
}

fn table_from_columns(columns: &serde_json::Map<String, Value>) -> LabelTable {
    let headers: Vec<String> = columns.keys().cloned().collect();
    let cols: Vec<Vec<Scalar>> = columns
        .values()
        .map(|v| match v {
            Value::Array(cells) => cells.iter().map(cell).collect(),
            other => vec![cell(other)],
        })
        .collect();
    let row_count = cols.iter().map(Vec::len).max().unwrap_or(0);

    let rows = (0..row_count)
        .map(|r| {
            cols.iter()
                .map(|c| c.get(r).cloned().unwrap_or_else(|| Scalar::Text("NA".to_string())))
                .collect()
        })
        .collect();

    LabelTable::new(headers, rows)
}
