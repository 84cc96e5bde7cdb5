#![forbid(unsafe_code)]

//! Rule registry for selecting which checks a scan runs
//!
//! The registry holds line rules and suggestion templates in their
//! canonical order. Order matters: issues on one line are reported in the
//! order their rules are registered, and suggestions likewise.

use crate::config::reviewer_toml::RulesConfig;
use crate::error::RuleError;
use crate::rules::builtin::builtin_line_rules;
use crate::rules::suggestion::{BUILTIN_TEMPLATES, SuggestionTemplate};
use crate::rules::LineRule;
use crate::types::RuleId;

/// Registry for storing the enabled rules
pub struct RuleRegistry {
    line_rules: Vec<Box<dyn LineRule>>,
    templates: Vec<SuggestionTemplate>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            line_rules: Vec::new(),
            templates: Vec::new(),
        }
    }

    /// Registry with every built-in line rule and suggestion template
    pub fn builtin() -> Self {
        Self {
            line_rules: builtin_line_rules(),
            templates: BUILTIN_TEMPLATES.to_vec(),
        }
    }

    /// Build the built-in registry and apply `[rules]` toggles
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if the configuration names a rule
    /// that does not exist.
    pub fn build_from_config(config: &RulesConfig) -> Result<Self, RuleError> {
        let mut registry = Self::builtin();

        for (rule_id, enabled) in &config.rules {
            if !registry.contains(rule_id) {
                return Err(RuleError::NotFound(rule_id.to_string()));
            }
            if !enabled {
                registry.disable(rule_id)?;
            }
        }

        Ok(registry)
    }

    /// Append a line rule after the existing ones
    pub fn add_line_rule(&mut self, rule: Box<dyn LineRule>) {
        self.line_rules.push(rule);
    }

    /// Append a suggestion template after the existing ones
    pub fn add_template(&mut self, template: SuggestionTemplate) {
        self.templates.push(template);
    }

    /// Remove a line rule or template by id
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if nothing with this id is registered.
    pub fn disable(&mut self, rule_id: &RuleId) -> Result<(), RuleError> {
        let before = self.len();
        self.line_rules.retain(|rule| rule.id() != rule_id);
        self.templates
            .retain(|template| template.id != rule_id.as_str());

        if self.len() == before {
            return Err(RuleError::NotFound(rule_id.to_string()));
        }
        Ok(())
    }

    /// Returns true if a line rule or template with this id is registered
    pub fn contains(&self, rule_id: &RuleId) -> bool {
        self.line_rules.iter().any(|rule| rule.id() == rule_id)
            || self
                .templates
                .iter()
                .any(|template| template.id == rule_id.as_str())
    }

    pub fn line_rules(&self) -> impl Iterator<Item = &dyn LineRule> {
        self.line_rules.iter().map(|rule| rule.as_ref())
    }

    pub fn templates(&self) -> &[SuggestionTemplate] {
        &self.templates
    }

    /// Total number of line rules and templates
    pub fn len(&self) -> usize {
        self.line_rules.len() + self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_rules: Vec<&str> = self.line_rules.iter().map(|r| r.id().as_str()).collect();
        let templates: Vec<&str> = self.templates.iter().map(|t| t.id).collect();
        f.debug_struct("RuleRegistry")
            .field("line_rules", &line_rules)
            .field("templates", &templates)
            .finish()
    }
}
