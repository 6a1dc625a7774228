// SPDX-License-Identifier: MIT

//! Condition string parser
//!
//! Parses the three condition forms:
//! - `{{ .request.flag }}`
//! - `Exist(request, headers)`
//! - `EQ(request, method, "GET")`

use super::ast::Condition;
use super::literal::Literal;
use super::path::FieldPath;
use crate::gate::error::FilterError;
use crate::gate::render::{FieldTemplateEngine, TemplateEngine};
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_PARSER: Lazy<ConditionParser> = Lazy::new(ConditionParser::new);

/// Parse a condition with the built-in template engine
pub fn parse(input: &str) -> Result<Condition, FilterError> {
    DEFAULT_PARSER.parse(input)
}

/// Compiles condition strings, delegating `{{ ... }}` to a template engine
#[derive(Clone)]
pub struct ConditionParser {
    engine: Arc<dyn TemplateEngine>,
}

impl ConditionParser {
    pub fn new() -> Self {
        Self::with_engine(Arc::new(FieldTemplateEngine::new()))
    }

    pub fn with_engine(engine: Arc<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Parse one condition string. Forms are tried in order: template,
    /// `Exist(...)`, `EQ(...)`.
    pub fn parse(&self, input: &str) -> Result<Condition, FilterError> {
        let input = input.trim();

        let condition = if input.starts_with("{{") && input.ends_with("}}") && input.len() >= 4 {
            Condition::template(input, self.engine.compile(input)?)
        } else if let Some(args) = call_args(input, "Exist") {
            let path = FieldPath::new(split_args(args), input)?;
            Condition::Exist { path }
        } else if let Some(args) = call_args(input, "EQ") {
            let mut tokens = split_args(args);
            let value = match tokens.pop() {
                Some(token) if !tokens.is_empty() => Literal::coerce(&token)?,
                _ => return Err(FilterError::MissingValue(input.to_string())),
            };
            Condition::Eq {
                path: FieldPath::new(tokens, input)?,
                value,
            }
        } else {
            return Err(FilterError::UnknownCondition(input.to_string()));
        };

        log::debug!("Compiled condition: {}", condition);
        Ok(condition)
    }
}

impl Default for ConditionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Interior of `name(...)`, if `input` is exactly such a call
fn call_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

/// Comma split with each token trimmed. Quotes are not special, so a comma
/// inside a quoted literal splits it.
fn split_args(args: &str) -> Vec<String> {
    args.split(',').map(|s| s.trim().to_string()).collect()
}
