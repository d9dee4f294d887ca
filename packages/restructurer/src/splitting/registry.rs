//! Ordered registry of compiled clause rules.

use regex::Regex;

use super::types::ClauseRule;
use crate::error::{RestructureError, Result};

/// A clause rule together with its compiled regex.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: ClauseRule,
    pub regex: Regex,
}

/// Registry of clause rules, applied in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClauseRegistry {
    rules: Vec<CompiledRule>,
}

impl ClauseRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile and append a clause rule.
    ///
    /// # Errors
    /// Returns [`RestructureError::InvalidClausePattern`] if the lead phrase
    /// does not form a valid regex.
    pub fn register(&mut self, rule: ClauseRule) -> Result<()> {
        let regex = Regex::new(&rule.pattern()).map_err(|source| {
            RestructureError::InvalidClausePattern {
                label: rule.label.clone(),
                source,
            }
        })?;
        self.rules.push(CompiledRule { rule, regex });
        Ok(())
    }

    /// Iterate over rules in application order.
    pub fn rules(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// Labels of the registered rules, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.rule.label.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
