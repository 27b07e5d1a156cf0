//! Error types for value access and conversion

use crate::value::ValueType;
use thiserror::Error;

/// Failures reported by the typed and container accessors of [`Value`].
///
/// Every accessor returns one of these instead of reading the wrong payload,
/// in debug and release builds alike.
///
/// [`Value`]: crate::value::Value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// The live discriminant has no conversion to the requested type
    #[error("Type error in {operation}: expected {expected}, got {got}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        got: ValueType,
    },

    /// A numeric conversion would not fit the target type
    #[error("Value {value} out of range in {operation} (target {target})")]
    OutOfRange {
        operation: &'static str,
        value: String,
        target: ValueType,
    },

    /// A string payload could not be parsed as the target number type
    #[error("Cannot parse {input:?} as {target}")]
    InvalidNumber { input: String, target: ValueType },
}

pub type ValueResult<T> = Result<T, ValueError>;
