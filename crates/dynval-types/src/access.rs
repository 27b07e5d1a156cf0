//! Typed and container accessors
//!
//! Scalar accessors convert between the numeric, boolean and string
//! payloads. A `Null` value reads as the zero of the requested type. Asking a
//! container for a scalar, or a scalar for a container, is a
//! [`ValueError::TypeMismatch`].

use crate::error::{ValueError, ValueResult};
use crate::value::{Value, ValueMap, ValueMapIntKey, ValueType, ValueVector};

/// Intermediate numeric form every scalar passes through before narrowing
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Get as a byte, converting from any scalar or numeric string
    pub fn as_byte(&self) -> ValueResult<u8> {
        let n = self.numeric("as_byte", ValueType::Byte)?;
        to_integer(n, "as_byte", ValueType::Byte)
    }

    /// Get as a signed 32-bit integer
    pub fn as_int(&self) -> ValueResult<i32> {
        let n = self.numeric("as_int", ValueType::Integer)?;
        to_integer(n, "as_int", ValueType::Integer)
    }

    /// Get as an unsigned 32-bit integer
    pub fn as_unsigned_int(&self) -> ValueResult<u32> {
        let n = self.numeric("as_unsigned_int", ValueType::Unsigned)?;
        to_integer(n, "as_unsigned_int", ValueType::Unsigned)
    }

    /// Get as a single precision float
    pub fn as_float(&self) -> ValueResult<f32> {
        match self.numeric("as_float", ValueType::Float)? {
            Numeric::Int(i) => Ok(i as f32),
            Numeric::Float(f) => {
                if f.is_finite() && f.abs() > f64::from(f32::MAX) {
                    return Err(out_of_range("as_float", f.to_string(), ValueType::Float));
                }
                Ok(f as f32)
            }
        }
    }

    /// Get as a double precision float
    pub fn as_double(&self) -> ValueResult<f64> {
        match self.numeric("as_double", ValueType::Double)? {
            Numeric::Int(i) => Ok(i as f64),
            Numeric::Float(f) => Ok(f),
        }
    }

    /// Get as a boolean.
    ///
    /// Numbers are true when non-zero. Strings are false for `""`, `"0"` and
    /// `"false"`, true otherwise.
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Null => Ok(false),
            Value::Byte(v) => Ok(*v != 0),
            Value::Integer(v) => Ok(*v != 0),
            Value::Unsigned(v) => Ok(*v != 0),
            Value::Float(v) => Ok(*v != 0.0),
            Value::Double(v) => Ok(*v != 0.0),
            Value::Boolean(v) => Ok(*v),
            Value::String(s) => Ok(!(s.is_empty() || s == "0" || s == "false")),
            _ => Err(self.mismatch("as_bool", "scalar or String")),
        }
    }

    /// Get as an owned string.
    ///
    /// Floats render with 7 fractional digits and doubles with 16.
    pub fn as_string(&self) -> ValueResult<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Byte(v) => Ok(v.to_string()),
            Value::Integer(v) => Ok(v.to_string()),
            Value::Unsigned(v) => Ok(v.to_string()),
            Value::Float(v) => Ok(format!("{:.7}", v)),
            Value::Double(v) => Ok(format!("{:.16}", v)),
            Value::Boolean(v) => Ok(if *v { "true" } else { "false" }.to_string()),
            Value::String(s) => Ok(s.clone()),
            _ => Err(self.mismatch("as_string", "scalar or String")),
        }
    }

    /// Borrow the string payload without converting
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("as_str", "String")),
        }
    }

    pub fn as_value_vector(&self) -> ValueResult<&ValueVector> {
        match self {
            Value::Vector(v) => Ok(v),
            _ => Err(self.mismatch("as_value_vector", "Vector")),
        }
    }

    pub fn as_value_vector_mut(&mut self) -> ValueResult<&mut ValueVector> {
        match self {
            Value::Vector(v) => Ok(v),
            _ => Err(self.mismatch("as_value_vector_mut", "Vector")),
        }
    }

    pub fn as_value_map(&self) -> ValueResult<&ValueMap> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(self.mismatch("as_value_map", "Map")),
        }
    }

    pub fn as_value_map_mut(&mut self) -> ValueResult<&mut ValueMap> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(self.mismatch("as_value_map_mut", "Map")),
        }
    }

    pub fn as_int_key_map(&self) -> ValueResult<&ValueMapIntKey> {
        match self {
            Value::IntKeyMap(m) => Ok(m),
            _ => Err(self.mismatch("as_int_key_map", "IntKeyMap")),
        }
    }

    pub fn as_int_key_map_mut(&mut self) -> ValueResult<&mut ValueMapIntKey> {
        match self {
            Value::IntKeyMap(m) => Ok(m),
            _ => Err(self.mismatch("as_int_key_map_mut", "IntKeyMap")),
        }
    }

    fn numeric(&self, operation: &'static str, target: ValueType) -> ValueResult<Numeric> {
        match self {
            Value::Null => Ok(Numeric::Int(0)),
            Value::Byte(v) => Ok(Numeric::Int(i64::from(*v))),
            Value::Integer(v) => Ok(Numeric::Int(i64::from(*v))),
            Value::Unsigned(v) => Ok(Numeric::Int(i64::from(*v))),
            Value::Float(v) => Ok(Numeric::Float(f64::from(*v))),
            Value::Double(v) => Ok(Numeric::Float(*v)),
            Value::Boolean(v) => Ok(Numeric::Int(i64::from(*v))),
            Value::String(s) => parse_numeric(s, target),
            _ => Err(self.mismatch(operation, "scalar or String")),
        }
    }

    fn mismatch(&self, operation: &'static str, expected: &'static str) -> ValueError {
        ValueError::TypeMismatch {
            operation,
            expected,
            got: self.value_type(),
        }
    }
}

fn parse_numeric(input: &str, target: ValueType) -> ValueResult<Numeric> {
    let trimmed = input.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(Numeric::Int(i));
    }
    trimmed
        .parse::<f64>()
        .map(Numeric::Float)
        .map_err(|_| ValueError::InvalidNumber {
            input: input.to_string(),
            target,
        })
}

// Fractions truncate toward zero; anything that does not fit is an error.
fn to_integer<T: TryFrom<i64>>(
    n: Numeric,
    operation: &'static str,
    target: ValueType,
) -> ValueResult<T> {
    let int = match n {
        Numeric::Int(i) => i,
        Numeric::Float(f) => {
            let truncated = f.trunc();
            if !truncated.is_finite()
                || truncated < i64::MIN as f64
                || truncated >= i64::MAX as f64
            {
                return Err(out_of_range(operation, f.to_string(), target));
            }
            truncated as i64
        }
    };
    T::try_from(int).map_err(|_| out_of_range(operation, int.to_string(), target))
}

fn out_of_range(operation: &'static str, value: String, target: ValueType) -> ValueError {
    ValueError::OutOfRange {
        operation,
        value,
        target,
    }
}
