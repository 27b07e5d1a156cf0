pub mod access;
pub mod constants;
pub mod describe;
pub mod equality;
pub mod error;
#[cfg(feature = "serde")]
mod float_serde;
pub mod value;

// Re-exports
pub use constants::{VALUE_MAP_INT_KEY_NULL, VALUE_MAP_NULL, VALUE_NULL, VALUE_VECTOR_NULL};
pub use describe::DescribeOptions;
pub use error::{ValueError, ValueResult};
pub use value::{Value, ValueMap, ValueMapIntKey, ValueType, ValueVector};
