// SPDX-License-Identifier: MIT

//! Condition evaluator

use super::ast::Condition;
use serde_json::Value;

/// Evaluate a compiled condition against an event
pub fn evaluate(condition: &Condition, event: &Value) -> bool {
    match condition {
        Condition::Template {
            render, expected, ..
        } => matches!(render.render(event), Some(Value::String(s)) if s == *expected),
        Condition::Exist { path } => path.resolve(event).is_some(),
        Condition::Eq { path, value } => path.resolve(event).is_some_and(|v| value.matches(v)),
    }
}
