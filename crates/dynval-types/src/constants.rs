//! Shared empty values for "nothing here" returns

use crate::value::{Value, ValueMap, ValueMapIntKey, ValueVector};
use once_cell::sync::Lazy;

/// A value that wraps nothing
pub const VALUE_NULL: Value = Value::Null;

/// An empty vector
pub const VALUE_VECTOR_NULL: ValueVector = Vec::new();

/// An empty string-keyed map, initialized on first use
pub static VALUE_MAP_NULL: Lazy<ValueMap> = Lazy::new(ValueMap::new);

/// An empty integer-keyed map, initialized on first use
pub static VALUE_MAP_INT_KEY_NULL: Lazy<ValueMapIntKey> = Lazy::new(ValueMapIntKey::new);
