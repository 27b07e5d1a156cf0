//! Conversion between plain JSON documents and values

use crate::error::{JsonError, JsonResult};
use dynval_types::{Value, ValueMap};

/// Options for [`value_to_json_with`]
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Write NaN and infinities as `null` instead of failing
    pub non_finite_as_null: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            non_finite_as_null: true,
        }
    }
}

/// Convert a JSON document into a value.
///
/// Integers that fit `i32` become `Integer`, then `u32` becomes `Unsigned`;
/// every other number becomes `Double`. Arrays become vectors and objects
/// become string-keyed maps.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => number_to_value(&n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => arr.into_iter().map(json_to_value).collect(),
        serde_json::Value::Object(map) => {
            let records: ValueMap = map
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect();
            Value::Map(records)
        }
    }
}

fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        if let Ok(small) = i32::try_from(i) {
            return Value::Integer(small);
        }
        if let Ok(unsigned) = u32::try_from(i) {
            return Value::Unsigned(unsigned);
        }
    }
    // u64 beyond i64, or a float
    Value::Double(n.as_f64().unwrap_or(f64::NAN))
}

/// Convert a value into a JSON document with the default options
pub fn value_to_json(val: &Value) -> JsonResult<serde_json::Value> {
    value_to_json_with(val, &JsonOptions::default())
}

/// Convert a value into a JSON document.
///
/// Integer-keyed maps become objects whose keys are the decimal integers, so
/// they read back as string-keyed maps.
pub fn value_to_json_with(val: &Value, options: &JsonOptions) -> JsonResult<serde_json::Value> {
    match val {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Byte(v) => Ok(serde_json::Value::from(*v)),
        Value::Integer(v) => Ok(serde_json::Value::from(*v)),
        Value::Unsigned(v) => Ok(serde_json::Value::from(*v)),
        Value::Float(v) => float_to_json(f64::from(*v), options),
        Value::Double(v) => float_to_json(*v, options),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Vector(items) => {
            let mut arr = Vec::with_capacity(items.len());
            for item in items {
                arr.push(value_to_json_with(item, options)?);
            }
            Ok(serde_json::Value::Array(arr))
        }
        Value::Map(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                obj.insert(k.clone(), value_to_json_with(v, options)?);
            }
            Ok(serde_json::Value::Object(obj))
        }
        Value::IntKeyMap(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                obj.insert(k.to_string(), value_to_json_with(v, options)?);
            }
            Ok(serde_json::Value::Object(obj))
        }
    }
}

fn float_to_json(n: f64, options: &JsonOptions) -> JsonResult<serde_json::Value> {
    if !n.is_finite() && options.non_finite_as_null {
        return Ok(serde_json::Value::Null);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(JsonError::InvalidNumber(n))
}

/// Parse JSON text into a value
pub fn parse_str(text: &str) -> JsonResult<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(json_to_value(parsed))
}

/// Render a value as JSON text
pub fn to_string(val: &Value, pretty: bool) -> JsonResult<String> {
    let json = value_to_json(val)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
