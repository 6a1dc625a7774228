// SPDX-License-Identifier: MIT

//! Typed error handling for eventgate-rs
//!
//! Every variant except the I/O and decoding wrappers describes a broken
//! condition string. Those are raised while a filter is being built and are
//! meant to abort stage startup; evaluating an event never fails.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Top-level error type for eventgate-rs
#[derive(Debug, Error)]
pub enum FilterError {
    /// The text matched none of the template, `Exist(...)` or `EQ(...)` forms
    #[error("could not build condition from '{0}'")]
    UnknownCondition(String),

    /// A field path was missing or contained an empty segment
    #[error("invalid field path in condition '{0}'")]
    InvalidPath(String),

    /// `EQ(...)` without a trailing literal
    #[error("missing comparison value in condition '{0}'")]
    MissingValue(String),

    /// Integer literal that does not fit a signed 32-bit value
    #[error("'{literal}' could not convert to int: {source}")]
    InvalidInteger {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    /// Literal with a decimal point that is not a valid float
    #[error("'{literal}' could not convert to float: {source}")]
    InvalidFloat {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    /// The template engine refused an expression
    #[error("invalid template '{expression}': {message}")]
    Template { expression: String, message: String },

    /// Configuration errors (bad file layout, wrong value types)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON decoding errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl FilterError {
    /// Create a template error
    pub fn template(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FilterError::UnknownCondition("Unknown(x)".to_string());
        assert_eq!(err.to_string(), "could not build condition from 'Unknown(x)'");

        let err = FilterError::template("{{ x }}", "expected a field reference");
        assert_eq!(
            err.to_string(),
            "invalid template '{{ x }}': expected a field reference"
        );
    }

    #[test]
    fn test_integer_error_keeps_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = FilterError::InvalidInteger {
            literal: "abc".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("'abc' could not convert to int"));
    }
}
