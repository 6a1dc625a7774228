// SPDX-License-Identifier: MIT

//! Compiled condition nodes

use super::literal::Literal;
use super::path::FieldPath;
use crate::gate::render::ValueRender;
use std::fmt;
use std::sync::Arc;

/// The string a template must render to for its condition to pass
pub const TEMPLATE_PASS_RESULT: &str = "y";

/// A single compiled condition
#[derive(Debug, Clone)]
pub enum Condition {
    /// `{{ ... }}`: passes when the render yields exactly `expected`
    Template {
        expression: String,
        render: Arc<dyn ValueRender>,
        expected: String,
    },
    /// `Exist(a, b)`: passes when the path resolves
    Exist { path: FieldPath },
    /// `EQ(a, b, value)`: passes when the path resolves to `value`
    Eq { path: FieldPath, value: Literal },
}

impl Condition {
    pub fn template(expression: impl Into<String>, render: Arc<dyn ValueRender>) -> Self {
        Condition::Template {
            expression: expression.into(),
            render,
            expected: TEMPLATE_PASS_RESULT.to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Template { expression, .. } => write!(f, "{}", expression),
            Condition::Exist { path } => write!(f, "Exist({})", path),
            Condition::Eq { path, value } => write!(f, "EQ({}, {})", path, value),
        }
    }
}
