// SPDX-License-Identifier: MIT

//! Filter configuration
//!
//! The filter reads the `if` key of a stage's YAML section. Other keys are
//! ignored so the section can carry the stage's own settings too:
//!
//! ```yaml
//! if:
//!   - 'Exist(request, method)'
//!   - 'EQ(request, method, "GET")'
//! ```

use crate::gate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Decoded filter section of a stage configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Condition strings; absent means "pass everything"
    #[serde(rename = "if", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
}

impl FilterConfig {
    pub fn new(conditions: Vec<String>) -> Self {
        Self {
            conditions: Some(conditions),
        }
    }

    /// Load a filter configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a filter configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Self, FilterError> {
        // An empty document decodes to null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FilterConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conditions() {
        let yaml = r#"
if:
  - 'Exist(a, b)'
  - 'EQ(a, b, "x")'
  - '{{ .flag }}'
"#;
        let config = FilterConfig::parse_yaml(yaml).unwrap();
        let conditions = config.conditions.unwrap();
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[1], r#"EQ(a, b, "x")"#);
    }

    #[test]
    fn test_missing_if_key() {
        let config = FilterConfig::parse_yaml("add_fields:\n  x: 1\n").unwrap();
        assert!(config.conditions.is_none());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(FilterConfig::parse_yaml("").unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_empty_list() {
        let config = FilterConfig::parse_yaml("if: []\n").unwrap();
        assert_eq!(config.conditions, Some(vec![]));
    }

    #[test]
    fn test_non_string_condition_is_an_error() {
        assert!(matches!(
            FilterConfig::parse_yaml("if:\n  - {a: 1}\n"),
            Err(FilterError::Yaml(_))
        ));
    }
}
