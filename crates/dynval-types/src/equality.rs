//! Value equality
//!
//! Discriminants are compared first and never coerced: `Integer(1)` and
//! `Unsigned(1)` are different values. Floating point payloads compare with
//! an absolute tolerance of their machine epsilon, and NaN equals NaN so that
//! every value equals its own copy.

use crate::value::Value;
use std::collections::HashMap;
use std::hash::Hash;

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::Double(a), Value::Double(b)) => double_eq(*a, *b),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (Value::Map(a), Value::Map(b)) => map_eq(a, b),
            (Value::IntKeyMap(a), Value::IntKeyMap(b)) => map_eq(a, b),
            _ => false,
        }
    }
}

fn float_eq(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a == b || (a - b).abs() <= f32::EPSILON
}

fn double_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b || (a - b).abs() <= f64::EPSILON
}

// Same key set, equal value per key; iteration order is irrelevant.
fn map_eq<K: Eq + Hash>(a: &HashMap<K, Value>, b: &HashMap<K, Value>) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| value == other))
}
