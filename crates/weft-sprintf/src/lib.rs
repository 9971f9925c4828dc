/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Named `%(name)s`-style string interpolation.
//!
//! This crate implements the subset of printf-style formatting used by
//! localized message templates:
//!
//! - `%(name)s` - string conversion of any scalar
//! - `%(name)d` - integer conversion
//! - `%(name)f` - float conversion (six decimal places, like C's `%f`)
//! - `%%` - a literal percent sign
//!
//! A `%` that does not introduce a well-formed `%(name)X` sequence passes
//! through unchanged, so ordinary prose containing percent signs never needs
//! escaping. A named reference to a value that was not supplied is an error.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use weft_sprintf::{sprintf, ScalarValue};
//!
//! let mut values = HashMap::new();
//! values.insert("name".to_string(), ScalarValue::from("World"));
//!
//! let output = sprintf("Hello, %(name)s!", &values).unwrap();
//! assert_eq!(output, "Hello, World!");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scalar value that can be interpolated into a format string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// A string value.
    String(String),

    /// A signed integer value.
    Int(i64),

    /// A floating point value.
    Float(f64),

    /// A boolean value.
    Bool(bool),
}

impl ScalarValue {
    /// Convert a JSON value to a scalar, if it is scalar-shaped.
    ///
    /// Arrays, objects, and null have no scalar representation and
    /// return `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<ScalarValue> {
        match value {
            serde_json::Value::String(s) => Some(ScalarValue::String(s.clone())),
            serde_json::Value::Bool(b) => Some(ScalarValue::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(ScalarValue::Int)
                .or_else(|| n.as_f64().map(ScalarValue::Float)),
            _ => None,
        }
    }

    /// Render this value for a `%s` conversion.
    fn to_display(&self) -> String {
        match self {
            ScalarValue::String(s) => s.clone(),
            ScalarValue::Int(i) => i.to_string(),
            ScalarValue::Float(f) => f.to_string(),
            ScalarValue::Bool(b) => b.to_string(),
        }
    }

    /// Render this value for a `%d` conversion.
    ///
    /// Floats truncate toward zero, booleans render as 0/1, and numeric
    /// strings are parsed. Anything else is a conversion error.
    fn to_integer(&self) -> Result<i64, String> {
        match self {
            ScalarValue::Int(i) => Ok(*i),
            ScalarValue::Float(f) => Ok(*f as i64),
            ScalarValue::Bool(b) => Ok(i64::from(*b)),
            ScalarValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("string \"{}\" is not an integer", s)),
        }
    }

    /// Render this value for an `%f` conversion.
    fn to_float(&self) -> Result<f64, String> {
        match self {
            ScalarValue::Float(f) => Ok(*f),
            ScalarValue::Int(i) => Ok(*i as f64),
            ScalarValue::Bool(b) => Ok(f64::from(u8::from(*b))),
            ScalarValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("string \"{}\" is not a number", s)),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int(i)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Int(i64::from(i))
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

/// Errors that can occur during interpolation.
#[derive(Debug, Error)]
pub enum SprintfError {
    /// The format string referenced a name with no supplied value.
    #[error("format references `%({name})` but no scalar value named `{name}` was supplied")]
    MissingValue { name: String },

    /// The conversion character is not one of `s`, `d`, or `f`.
    #[error("unknown conversion `%({name}){conversion}`")]
    UnknownConversion { name: String, conversion: char },

    /// The value cannot be rendered with the requested conversion.
    #[error("cannot render `{name}` with `%{conversion}`: {message}")]
    InvalidConversion {
        name: String,
        conversion: char,
        message: String,
    },
}

/// Result type for interpolation.
pub type SprintfResult<T> = Result<T, SprintfError>;

/// Interpolate named values into a format string.
///
/// See the crate documentation for the supported conversions.
pub fn sprintf(format: &str, values: &HashMap<String, ScalarValue>) -> SprintfResult<String> {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match parse_reference(rest) {
            Reference::Escaped => {
                out.push('%');
                rest = &rest[2..];
            }
            Reference::Named {
                name,
                conversion,
                len,
            } => {
                let value = values
                    .get(name)
                    .ok_or_else(|| SprintfError::MissingValue {
                        name: name.to_string(),
                    })?;
                out.push_str(&render(name, value, conversion)?);
                rest = &rest[len..];
            }
            // Not a recognized sequence; the percent sign is literal.
            Reference::Literal => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// What a `%` at the start of `rest` introduces.
enum Reference<'a> {
    /// `%%`
    Escaped,
    /// `%(name)X` where `len` is the byte length of the whole sequence.
    Named {
        name: &'a str,
        conversion: char,
        len: usize,
    },
    /// A bare `%` that is part of ordinary text.
    Literal,
}

fn parse_reference(rest: &str) -> Reference<'_> {
    let bytes = rest.as_bytes();
    match bytes.get(1) {
        Some(b'%') => Reference::Escaped,
        Some(b'(') => {
            let Some(close) = rest.find(')') else {
                return Reference::Literal;
            };
            let name = &rest[2..close];
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                return Reference::Literal;
            }
            match rest[close + 1..].chars().next() {
                Some(conversion) => Reference::Named {
                    name,
                    conversion,
                    len: close + 1 + conversion.len_utf8(),
                },
                None => Reference::Literal,
            }
        }
        _ => Reference::Literal,
    }
}

fn render(name: &str, value: &ScalarValue, conversion: char) -> SprintfResult<String> {
    let invalid = |message: String| SprintfError::InvalidConversion {
        name: name.to_string(),
        conversion,
        message,
    };

    match conversion {
        's' => Ok(value.to_display()),
        'd' => value.to_integer().map(|i| i.to_string()).map_err(invalid),
        'f' => value.to_float().map(|f| format!("{:.6}", f)).map_err(invalid),
        other => Err(SprintfError::UnknownConversion {
            name: name.to_string(),
            conversion: other,
        }),
    }
}
