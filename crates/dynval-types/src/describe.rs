//! Human-readable rendering of values for logs and diagnostics.
//!
//! The output is meant for people, not parsers: its layout may change.

use crate::value::Value;
use std::fmt::{self, Write};

/// Options controlling [`Value::describe_with`]
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Spaces per nesting level
    pub indent_size: usize,
    /// Render at most this many entries per container
    pub max_items: Option<usize>,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_items: None,
        }
    }
}

impl Value {
    /// Describe the value with the default layout
    pub fn description(&self) -> String {
        self.describe_with(&DescribeOptions::default())
    }

    /// Describe the value.
    ///
    /// Scalars render inline, strings quoted. Vectors list `index: value`
    /// lines inside `[ ]`; maps list `key: value` lines inside `{ }` with keys
    /// sorted so the output is stable.
    pub fn describe_with(&self, options: &DescribeOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_value(&mut out, self, 0, options);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0, &DescribeOptions::default())
    }
}

fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    depth: usize,
    options: &DescribeOptions,
) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Byte(v) => write!(out, "{}", v),
        Value::Integer(v) => write!(out, "{}", v),
        Value::Unsigned(v) => write!(out, "{}", v),
        Value::Float(v) => write!(out, "{}", v),
        Value::Double(v) => write!(out, "{}", v),
        Value::Boolean(v) => write!(out, "{}", v),
        Value::String(s) => write!(out, "{:?}", s),
        Value::Vector(items) => {
            let entries = items.iter().enumerate().map(|(i, v)| (i.to_string(), v));
            write_block(out, ('[', ']'), entries, items.len(), depth, options)
        }
        Value::Map(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let entries = keys.into_iter().map(|k| (k.clone(), &map[k]));
            write_block(out, ('{', '}'), entries, map.len(), depth, options)
        }
        Value::IntKeyMap(map) => {
            let mut keys: Vec<&i32> = map.keys().collect();
            keys.sort();
            let entries = keys.into_iter().map(|k| (k.to_string(), &map[k]));
            write_block(out, ('{', '}'), entries, map.len(), depth, options)
        }
    }
}

fn write_block<'a, W, I>(
    out: &mut W,
    (open, close): (char, char),
    entries: I,
    len: usize,
    depth: usize,
    options: &DescribeOptions,
) -> fmt::Result
where
    W: Write,
    I: Iterator<Item = (String, &'a Value)>,
{
    if len == 0 {
        return write!(out, "{}{}", open, close);
    }

    let inner = " ".repeat((depth + 1) * options.indent_size);
    let limit = options.max_items.unwrap_or(usize::MAX);

    out.write_char(open)?;
    for (label, value) in entries.take(limit) {
        write!(out, "\n{}{}: ", inner, label)?;
        write_value(out, value, depth + 1, options)?;
    }
    if len > limit {
        write!(out, "\n{}... and {} more", inner, len - limit)?;
    }
    write!(out, "\n{}{}", " ".repeat(depth * options.indent_size), close)
}
