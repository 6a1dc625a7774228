// SPDX-License-Identifier: MIT

//! Field paths and nested lookup

use crate::gate::error::FilterError;
use serde_json::Value;
use std::fmt;

/// An ordered, non-empty list of keys into nested event objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Build a path from its segments. `source` is the condition text the
    /// segments came from and is only used for error reporting.
    pub fn new(segments: Vec<String>, source: &str) -> Result<Self, FilterError> {
        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(FilterError::InvalidPath(source.to_string()));
        }
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Look the path up in `root`.
    ///
    /// Every segment but the last must land on an object. A key that is
    /// present with a `null` value still counts as found.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let (last, parents) = self.0.split_last()?;
        let mut current = root.as_object()?;
        for segment in parents {
            current = current.get(segment)?.as_object()?;
        }
        current.get(last)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> FieldPath {
        FieldPath::new(segments.iter().map(|s| s.to_string()).collect(), "test").unwrap()
    }

    #[test]
    fn test_resolve_top_level() {
        let event = json!({"a": 1});
        assert_eq!(path(&["a"]).resolve(&event), Some(&json!(1)));
        assert_eq!(path(&["b"]).resolve(&event), None);
    }

    #[test]
    fn test_resolve_nested() {
        let event = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(path(&["a", "b", "c"]).resolve(&event), Some(&json!("deep")));
        assert_eq!(path(&["a", "b"]).resolve(&event), Some(&json!({"c": "deep"})));
        assert_eq!(path(&["a", "x", "c"]).resolve(&event), None);
    }

    #[test]
    fn test_resolve_stops_on_non_object() {
        assert_eq!(path(&["a", "b"]).resolve(&json!({"a": 1})), None);
        assert_eq!(path(&["a", "b"]).resolve(&json!({"a": "b"})), None);
        assert_eq!(path(&["a", "b"]).resolve(&json!({"a": null})), None);
        assert_eq!(path(&["a", "0"]).resolve(&json!({"a": ["x"]})), None);
    }

    #[test]
    fn test_resolve_null_leaf_is_present() {
        let event = json!({"a": {"b": null}});
        assert_eq!(path(&["a", "b"]).resolve(&event), Some(&Value::Null));
    }

    #[test]
    fn test_resolve_non_object_root() {
        assert_eq!(path(&["a"]).resolve(&json!([1, 2])), None);
        assert_eq!(path(&["a"]).resolve(&json!("a")), None);
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(FieldPath::new(vec![], "Exist()").is_err());
        assert!(FieldPath::new(vec!["a".into(), "".into()], "Exist(a,)").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(path(&["a", "b"]).to_string(), "a, b");
    }
}
