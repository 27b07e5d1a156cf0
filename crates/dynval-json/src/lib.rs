//! JSON support for dynval values.
//!
//! Two formats are offered. The plain bridge maps values onto ordinary JSON
//! documents and back, which loses some discriminants (a byte reads back as
//! an integer). The tagged format goes through serde and round-trips every
//! value exactly.

pub mod bridge;
pub mod error;
pub mod tagged;

// Re-exports
pub use bridge::{
    json_to_value, parse_str, to_string, value_to_json, value_to_json_with, JsonOptions,
};
pub use error::{JsonError, JsonResult};
pub use tagged::{from_tagged_str, to_tagged_string};
