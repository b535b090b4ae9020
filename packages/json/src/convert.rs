//! Field typing and lenient value coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a record field.
///
/// `Auto` keeps whatever the payload held. The typed variants coerce in the
/// forgiving manner grid readers are expected to: numeric strings parse,
/// absent values become the type's empty value, and anything unconvertible
/// falls back rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Auto,
    String,
    Int,
    Float,
    Bool,
}

impl FieldType {
    /// Coerce a raw JSON value to this type.
    pub fn convert(self, value: Value) -> Value {
        match self {
            FieldType::Auto => value,
            FieldType::String => convert_string(value),
            FieldType::Int => Value::from(convert_int(&value)),
            FieldType::Float => Value::from(convert_float(&value)),
            FieldType::Bool => Value::from(convert_bool(&value)),
        }
    }
}

fn convert_string(value: Value) -> Value {
    match value {
        Value::Null => Value::from(""),
        Value::String(s) => Value::String(s),
        other => Value::from(other.to_string()),
    }
}

fn convert_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
            .unwrap_or(0),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

fn convert_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

fn convert_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true" || s == "1",
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 1.0),
        _ => false,
    }
}
