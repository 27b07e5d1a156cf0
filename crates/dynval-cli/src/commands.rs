//! Subcommand implementations.
//!
//! Each command returns the text to print so it can be exercised without a
//! terminal; `main` only does the printing and exit codes.

use anyhow::{Context, Result};
use clap::ValueEnum;
use dynval_types::{DescribeOptions, Value};
use std::fs;
use std::io::{self, Read};

/// Text to print and the exit code to leave with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub code: i32,
}

impl Outcome {
    pub fn success(output: String) -> Self {
        Self { output, code: 0 }
    }
}

/// Scalar accessor selected by `dynval get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Accessor {
    Byte,
    Int,
    Unsigned,
    Float,
    Double,
    Bool,
    String,
}

/// Read a document from a path, or stdin when the path is `-`
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Error reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path))
    }
}

/// Parse document text in either the plain or the tagged format
pub fn parse_document(text: &str, tagged: bool) -> Result<Value> {
    let value = if tagged {
        dynval_json::from_tagged_str(text).context("Invalid tagged document")?
    } else {
        dynval_json::parse_str(text).context("Invalid JSON document")?
    };
    Ok(value)
}

pub fn load(path: &str, tagged: bool) -> Result<Value> {
    let text = read_input(path)?;
    parse_document(&text, tagged).with_context(|| format!("While loading '{}'", path))
}

pub fn describe(value: &Value, indent: Option<usize>, max_items: Option<usize>) -> String {
    let mut options = DescribeOptions::default();
    if let Some(indent) = indent {
        options.indent_size = indent;
    }
    options.max_items = max_items;
    value.describe_with(&options)
}

pub fn type_of(value: &Value) -> String {
    value.value_type().to_string()
}

pub fn get(value: &Value, accessor: Accessor) -> Result<String> {
    let text = match accessor {
        Accessor::Byte => value.as_byte()?.to_string(),
        Accessor::Int => value.as_int()?.to_string(),
        Accessor::Unsigned => value.as_unsigned_int()?.to_string(),
        Accessor::Float => value.as_float()?.to_string(),
        Accessor::Double => value.as_double()?.to_string(),
        Accessor::Bool => value.as_bool()?.to_string(),
        Accessor::String => value.as_string()?,
    };
    Ok(text)
}

/// Compare two documents; exit code 1 when they differ
pub fn compare(left: &Value, right: &Value) -> Outcome {
    let equal = left == right;
    Outcome {
        output: equal.to_string(),
        code: if equal { 0 } else { 1 },
    }
}

/// Re-encode a document in the other format
pub fn convert(value: &Value, to_tagged: bool, pretty: bool) -> Result<String> {
    let text = if to_tagged {
        dynval_json::to_tagged_string(value, pretty)?
    } else {
        dynval_json::to_string(value, pretty)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_plain_document() {
        let value = parse_document(r#"{"b": [1], "a": "x"}"#, false).unwrap();
        assert_eq!(
            describe(&value, None, None),
            "{\n  a: \"x\"\n  b: [\n    0: 1\n  ]\n}"
        );
        assert_eq!(type_of(&value), "Map");
    }

    #[test]
    fn test_get_converts_scalars() {
        let value = parse_document("\"12\"", false).unwrap();
        assert_eq!(get(&value, Accessor::Int).unwrap(), "12");
        assert_eq!(get(&value, Accessor::Bool).unwrap(), "true");
        assert_eq!(get(&value, Accessor::String).unwrap(), "12");
    }

    #[test]
    fn test_get_reports_mismatch() {
        let value = parse_document("[1, 2]", false).unwrap();
        let err = get(&value, Accessor::Double).unwrap_err();
        assert!(err.to_string().contains("expected scalar or String, got Vector"));
    }

    #[test]
    fn test_compare_sets_exit_code() {
        let a = parse_document(r#"{"x": [1, 2], "y": null}"#, false).unwrap();
        let b = parse_document(r#"{"y": null, "x": [1, 2]}"#, false).unwrap();
        let c = parse_document(r#"{"x": [2, 1], "y": null}"#, false).unwrap();

        assert_eq!(compare(&a, &b), Outcome::success("true".to_string()));
        let differ = compare(&a, &c);
        assert_eq!(differ.output, "false");
        assert_eq!(differ.code, 1);
    }

    #[test]
    fn test_convert_round_trip() {
        let value = parse_document(r#"{"n": 3}"#, false).unwrap();
        let tagged = convert(&value, true, false).unwrap();
        assert_eq!(tagged, r#"{"Map":{"n":{"Integer":3}}}"#);
        assert_eq!(parse_document(&tagged, true).unwrap(), value);
    }

    #[test]
    fn test_bad_document_has_context() {
        let err = parse_document("{", false).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON document"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load("/nonexistent/dynval-input.json", false).unwrap_err();
        assert!(format!("{:#}", err).contains("Error reading file"));
    }
}
