use std::collections::HashMap;
use std::fmt;

/// Ordered sequence of values
pub type ValueVector = Vec<Value>;

/// Mapping from string keys to values
pub type ValueMap = HashMap<String, Value>;

/// Mapping from integer keys to values
pub type ValueMapIntKey = HashMap<i32, Value>;

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// No value is wrapped
    #[default]
    None,
    Byte,
    Integer,
    Unsigned,
    Float,
    Double,
    Boolean,
    String,
    Vector,
    Map,
    IntKeyMap,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::None => "None",
            ValueType::Byte => "Byte",
            ValueType::Integer => "Integer",
            ValueType::Unsigned => "Unsigned",
            ValueType::Float => "Float",
            ValueType::Double => "Double",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::Vector => "Vector",
            ValueType::Map => "Map",
            ValueType::IntKeyMap => "IntKeyMap",
        }
    }

    /// True for the three container discriminants
    pub fn is_container(self) -> bool {
        matches!(self, ValueType::Vector | ValueType::Map | ValueType::IntKeyMap)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed value exchanged between engine subsystems.
///
/// A `Value` owns its payload outright: cloning deep-copies strings and
/// containers, and containers nest other values to form a tree. Equality is
/// implemented in `equality.rs`, conversions in `access.rs`, and the
/// diagnostic rendering in `describe.rs`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    Byte(u8),
    Integer(i32),
    Unsigned(u32),
    Float(#[cfg_attr(feature = "serde", serde(with = "crate::float_serde::single"))] f32),
    Double(#[cfg_attr(feature = "serde", serde(with = "crate::float_serde::double"))] f64),
    Boolean(bool),
    String(String),
    Vector(ValueVector),
    Map(ValueMap),
    IntKeyMap(ValueMapIntKey),
}

impl Value {
    /// A predefined value that wraps nothing
    pub const VALUE_NULL: Value = Value::Null;

    /// Create an empty (null) value
    pub fn new() -> Self {
        Value::Null
    }

    /// Check if the value wraps nothing
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the discriminant of the wrapped payload
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::None,
            Value::Byte(_) => ValueType::Byte,
            Value::Integer(_) => ValueType::Integer,
            Value::Unsigned(_) => ValueType::Unsigned,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
            Value::Vector(_) => ValueType::Vector,
            Value::Map(_) => ValueType::Map,
            Value::IntKeyMap(_) => ValueType::IntKeyMap,
        }
    }

    /// Move the payload out, leaving `Null` behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Replace the payload, returning the previous one
    pub fn replace(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(self, value.into())
    }

    /// Assign a new payload; the previous one is dropped first
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }
}

// Constructors
impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Byte(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Unsigned(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<ValueVector> for Value {
    fn from(v: ValueVector) -> Self {
        Value::Vector(v)
    }
}

impl From<&ValueVector> for Value {
    fn from(v: &ValueVector) -> Self {
        Value::Vector(v.clone())
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Value::Map(v)
    }
}

impl From<&ValueMap> for Value {
    fn from(v: &ValueMap) -> Self {
        Value::Map(v.clone())
    }
}

impl From<ValueMapIntKey> for Value {
    fn from(v: ValueMapIntKey) -> Self {
        Value::IntKeyMap(v)
    }
}

impl From<&ValueMapIntKey> for Value {
    fn from(v: &ValueMapIntKey) -> Self {
        Value::IntKeyMap(v.clone())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Vector(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

impl FromIterator<(i32, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (i32, Value)>>(iter: I) -> Self {
        Value::IntKeyMap(iter.into_iter().collect())
    }
}
