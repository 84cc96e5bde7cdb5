#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module provides formatters for the `jsreview list` command. It
//! supports both human-readable and JSONL output formats.

use crate::rules::RuleRegistry;
use serde::Serialize;

/// What a listed rule produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    /// Per-line check producing issues
    Line,
    /// Whole-text trigger producing a suggestion
    Suggestion,
}

impl RuleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSource::Line => "line",
            RuleSource::Suggestion => "suggestion",
        }
    }
}

/// Display information for a single rule
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub rule_id: String,
    pub description: String,
    pub source: RuleSource,
    /// Severity of issues; suggestions have none
    pub severity: Option<String>,
}

impl RuleInfo {
    /// Collect display information for every rule in the registry
    pub fn from_registry(registry: &RuleRegistry) -> Vec<RuleInfo> {
        let line_rules = registry.line_rules().map(|rule| RuleInfo {
            rule_id: rule.id().to_string(),
            description: rule.description().to_string(),
            source: RuleSource::Line,
            severity: Some(rule.severity().to_string()),
        });

        let templates = registry.templates().iter().map(|template| RuleInfo {
            rule_id: template.id.to_string(),
            description: format!("{} (triggered by `{}`)", template.title, template.trigger),
            source: RuleSource::Suggestion,
            severity: None,
        });

        line_rules.chain(templates).collect()
    }
}

/// Human-readable formatter for rule listings
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Format a list of rules for human consumption
    pub fn format(&self, rules: &[RuleInfo]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rules ({} enabled):\n", rules.len()));
        output.push('\n');

        for rule in rules {
            output.push_str(&format!("{} ({})\n", rule.rule_id, rule.source.as_str()));
            output.push_str(&format!("  Description: {}\n", rule.description));
            if let Some(severity) = &rule.severity {
                output.push_str(&format!("  Severity: {}\n", severity));
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleInfo]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule
#[derive(Debug, Serialize)]
struct JsonlRuleInfo<'a> {
    rule_id: &'a str,
    source: &'static str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<&'a str>,
}

/// JSONL formatter for rule listings
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format a list of rules as JSONL, one object per rule
    pub fn format(&self, rules: &[RuleInfo]) -> String {
        let mut output = String::new();

        for rule in rules {
            let record = JsonlRuleInfo {
                rule_id: &rule.rule_id,
                source: rule.source.as_str(),
                description: &rule.description,
                severity: rule.severity.as_deref(),
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleInfo]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
