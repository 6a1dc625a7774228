// SPDX-License-Identifier: MIT

//! Rendering hooks for `{{ ... }}` conditions
//!
//! A templated condition hands its whole text to a [`TemplateEngine`] once at
//! build time and keeps the returned [`ValueRender`]. A full template
//! language can be plugged in through the trait; the built-in
//! [`FieldTemplateEngine`] only understands field references such as
//! `{{ .request.flag }}`.

use crate::gate::error::FilterError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Produces a value (or nothing) from an event
pub trait ValueRender: Send + Sync + fmt::Debug {
    fn render(&self, event: &Value) -> Option<Value>;
}

/// Compiles template expressions into renderers
pub trait TemplateEngine: Send + Sync {
    fn compile(&self, expression: &str) -> Result<Arc<dyn ValueRender>, FilterError>;
}

/// Engine for `{{ .a.b }}` field references
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldTemplateEngine;

impl FieldTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for FieldTemplateEngine {
    fn compile(&self, expression: &str) -> Result<Arc<dyn ValueRender>, FilterError> {
        let inner = expression
            .strip_prefix("{{")
            .and_then(|s| s.strip_suffix("}}"))
            .ok_or_else(|| FilterError::template(expression, "expected '{{ ... }}'"))?
            .trim();

        let reference = inner
            .strip_prefix('.')
            .ok_or_else(|| FilterError::template(expression, "expected a field reference"))?;

        let segments: Vec<String> = reference.split('.').map(str::to_string).collect();
        if segments
            .iter()
            .any(|s| s.is_empty() || s.chars().any(char::is_whitespace))
        {
            return Err(FilterError::template(expression, "malformed field reference"));
        }

        Ok(Arc::new(FieldRender { segments }))
    }
}

/// Renders the value found at a dotted field reference
#[derive(Debug, Clone)]
pub struct FieldRender {
    segments: Vec<String>,
}

impl ValueRender for FieldRender {
    fn render(&self, event: &Value) -> Option<Value> {
        let mut current = event;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }
}
