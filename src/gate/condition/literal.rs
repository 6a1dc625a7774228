// SPDX-License-Identifier: MIT

//! Typed literals for `EQ(...)` conditions
//!
//! The lexical form of the token alone decides the type: `"quoted"` is a
//! string, anything containing `.` is a float, everything else an integer.

use crate::gate::error::FilterError;
use serde_json::Value;
use std::fmt;

/// Literal values in `EQ(...)` conditions
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    /// Always within the signed 32-bit range
    Integer(i64),
    Float(f64),
}

impl Literal {
    /// Convert a trimmed condition token into a typed literal
    pub fn coerce(token: &str) -> Result<Self, FilterError> {
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Ok(Literal::String(token[1..token.len() - 1].to_string()));
        }

        if token.contains('.') {
            return strip_separators(token)
                .parse::<f64>()
                .map(Literal::Float)
                .map_err(|source| FilterError::InvalidFloat {
                    literal: token.to_string(),
                    source,
                });
        }

        parse_int(token)
            .map(|n| Literal::Integer(i64::from(n)))
            .map_err(|source| FilterError::InvalidInteger {
                literal: token.to_string(),
                source,
            })
    }

    /// Strict type and value equality against an event value.
    ///
    /// Integers only match JSON integers and floats only match JSON floats,
    /// so `3` never equals `3.0`.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::String(s), Value::String(v)) => s == v,
            (Literal::Integer(i), Value::Number(n)) if !n.is_f64() => n.as_i64() == Some(*i),
            (Literal::Float(f), Value::Number(n)) if n.is_f64() => n.as_f64() == Some(*f),
            _ => false,
        }
    }
}

/// Integer parsing with base prefixes: `0x` hex, `0o` or a bare leading `0`
/// octal, `0b` binary. Underscores are accepted where [`underscores_ok`]
/// allows them.
fn parse_int(token: &str) -> Result<i32, std::num::ParseIntError> {
    let (sign, rest) = match token.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', token.strip_prefix('+').unwrap_or(token)),
    };

    let lower = rest.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits) = match lower.as_deref() {
        Some("0x") => (16, &rest[2..]),
        Some("0o") => (8, &rest[2..]),
        Some("0b") => (2, &rest[2..]),
        _ if rest.len() > 1 && rest.starts_with('0') => (8, &rest[1..]),
        _ => (10, rest),
    };

    let digits = if underscores_ok(token) {
        digits.replace('_', "")
    } else {
        digits.to_string()
    };

    // The explicit sign makes a second sign inside `digits` a parse error.
    i32::from_str_radix(&format!("{}{}", sign, digits), radix)
}

/// Drop digit separators from a well-formed token. A misplaced underscore is
/// left in place so the numeric parse rejects it.
fn strip_separators(token: &str) -> String {
    if underscores_ok(token) {
        token.replace('_', "")
    } else {
        token.to_string()
    }
}

/// An underscore must sit between two digits or directly after a `0x`, `0o`
/// or `0b` prefix.
fn underscores_ok(token: &str) -> bool {
    let s = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token)
        .as_bytes();

    // '^' start, '0' digit or prefix, '_' underscore, '!' anything else
    let mut saw = b'^';
    let mut hex = false;
    let mut rest = s;
    if s.len() >= 2 && s[0] == b'0' && matches!(s[1].to_ascii_lowercase(), b'b' | b'o' | b'x') {
        saw = b'0';
        hex = s[1].to_ascii_lowercase() == b'x';
        rest = &s[2..];
    }

    for &c in rest {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = b'0';
        } else if c == b'_' {
            if saw != b'0' {
                return false;
            }
            saw = b'_';
        } else if saw == b'_' {
            return false;
        } else {
            saw = b'!';
        }
    }
    saw != b'_'
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Integer(i) => write!(f, "{}", i),
            // Always keep a '.' so the text reads back as a float.
            Literal::Float(x) => {
                let text = x.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}
