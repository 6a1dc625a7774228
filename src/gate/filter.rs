// SPDX-License-Identifier: MIT

//! Conjunction of compiled conditions

use crate::gate::condition::{evaluate, Condition, ConditionParser};
use crate::gate::config::FilterConfig;
use crate::gate::error::FilterError;
use serde_json::Value;

/// Passes an event only when every configured condition passes
#[derive(Debug, Clone, Default)]
pub struct ConditionFilter {
    conditions: Option<Vec<Condition>>,
}

impl ConditionFilter {
    /// A filter with nothing configured; every event passes
    pub fn pass_all() -> Self {
        Self { conditions: None }
    }

    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            conditions: Some(conditions),
        }
    }

    /// Build a filter with the built-in template engine
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::from_config_with(config, &ConditionParser::new())
    }

    /// Build a filter, compiling every condition with `parser`.
    ///
    /// The first malformed condition aborts the build.
    pub fn from_config_with(
        config: &FilterConfig,
        parser: &ConditionParser,
    ) -> Result<Self, FilterError> {
        let Some(texts) = &config.conditions else {
            return Ok(Self::pass_all());
        };

        let conditions = texts
            .iter()
            .map(|text| parser.parse(text))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Built condition filter with {} condition(s)", conditions.len());
        Ok(Self::new(conditions))
    }

    /// Whether the event should be processed. Conditions run in configured
    /// order and evaluation stops at the first failure.
    pub fn pass(&self, event: &Value) -> bool {
        let Some(conditions) = &self.conditions else {
            return true;
        };

        for condition in conditions {
            if !evaluate(condition, event) {
                log::trace!("Condition failed: {}", condition);
                return false;
            }
        }
        true
    }

    pub fn conditions(&self) -> &[Condition] {
        self.conditions.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.conditions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions().is_empty()
    }
}
