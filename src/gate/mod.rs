// SPDX-License-Identifier: MIT

//! Event gating for pipeline stages
//!
//! A stage configures a list of condition strings under its `if` key. Each
//! string compiles into a [`Condition`]; a [`ConditionFilter`] holds them and
//! answers whether the stage should act on a given event.

pub mod condition;
pub mod config;
pub mod error;
pub mod filter;
pub mod lines;
pub mod render;

pub use condition::{Condition, ConditionParser, FieldPath, Literal};
pub use config::FilterConfig;
pub use error::FilterError;
pub use filter::ConditionFilter;
pub use lines::{filter_lines, LineSummary};
pub use render::{FieldTemplateEngine, TemplateEngine, ValueRender};
