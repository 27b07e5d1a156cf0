//! Serde representation of `Float` and `Double` payloads.
//!
//! Finite numbers are written as numbers. NaN and the infinities, which JSON
//! cannot carry, are written as the strings `"NaN"`, `"inf"` and `"-inf"` so
//! that every value reads back with its payload intact.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

fn non_finite_name(v: f64) -> &'static str {
    if v.is_nan() {
        NAN
    } else if v > 0.0 {
        INFINITY
    } else {
        NEG_INFINITY
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match v {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

pub(crate) mod single {
    use super::*;

    pub fn serialize<S: Serializer>(v: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            serializer.serialize_f32(*v)
        } else {
            serializer.serialize_str(non_finite_name(f64::from(*v)))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        deserializer.deserialize_any(FloatVisitor).map(|v| v as f32)
    }
}

pub(crate) mod double {
    use super::*;

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            serializer.serialize_f64(*v)
        } else {
            serializer.serialize_str(non_finite_name(*v))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Value, ValueType};

    #[test]
    fn test_non_finite_written_as_names() {
        let text = serde_json::to_string(&Value::from(f64::NAN)).unwrap();
        assert_eq!(text, "{\"Double\":\"NaN\"}");
        let text = serde_json::to_string(&Value::from(f32::NEG_INFINITY)).unwrap();
        assert_eq!(text, "{\"Float\":\"-inf\"}");
    }

    #[test]
    fn test_finite_written_as_numbers() {
        let text = serde_json::to_string(&Value::from(0.5f32)).unwrap();
        assert_eq!(text, "{\"Float\":0.5}");
    }

    #[test]
    fn test_non_finite_read_back() {
        let v: Value = serde_json::from_str("{\"Float\":\"inf\"}").unwrap();
        assert_eq!(v.value_type(), ValueType::Float);
        assert_eq!(v.as_float().unwrap(), f32::INFINITY);

        let v: Value = serde_json::from_str("{\"Double\":\"NaN\"}").unwrap();
        assert!(v.as_double().unwrap().is_nan());

        let v: Value = serde_json::from_str("{\"Double\":2}").unwrap();
        assert_eq!(v, Value::from(2.0f64));
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(serde_json::from_str::<Value>("{\"Double\":\"nan\"}").is_err());
        assert!(serde_json::from_str::<Value>("{\"Float\":null}").is_err());
    }
}
