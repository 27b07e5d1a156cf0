//! Lossless persistence through the serde representation of [`Value`].
//!
//! Unlike the plain bridge, every payload keeps its discriminant:
//! `{"Float":0.5}` reads back as a float, not a double. NaN and the
//! infinities are written as `{"Double":"NaN"}`, `{"Float":"-inf"}` and so on.

use crate::error::JsonResult;
use dynval_types::Value;

pub fn to_tagged_string(val: &Value, pretty: bool) -> JsonResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(val)?
    } else {
        serde_json::to_string(val)?
    };
    Ok(text)
}

pub fn from_tagged_str(text: &str) -> JsonResult<Value> {
    Ok(serde_json::from_str(text)?)
}
