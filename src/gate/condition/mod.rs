// SPDX-License-Identifier: MIT

//! Condition compilation and evaluation
//!
//! Conditions are one of:
//! - `{{ .flag }}`: passes when the template renders `"y"`
//! - `Exist(a, b)`: passes when `a.b` is present
//! - `EQ(a, b, "x")`: passes when `a.b` equals the typed literal

mod ast;
mod evaluator;
mod literal;
mod parser;
mod path;

pub use ast::{Condition, TEMPLATE_PASS_RESULT};
pub use evaluator::evaluate;
pub use literal::Literal;
pub use parser::{parse, ConditionParser};
pub use path::FieldPath;
