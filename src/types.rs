#![forbid(unsafe_code)]

//! Core domain types for jsreview
//!
//! These are the records produced by a scan. Serialized field names follow
//! the report layout consumed by front ends (`type`, `line`, `code`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maintainability score reported for every input
///
/// This is a fixed placeholder. It is never derived from the scanned text.
pub const MAINTAINABILITY_SCORE: u32 = 85;

/// Kind of issue, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
            IssueKind::Info => "info",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Creates a RuleId for a built-in rule name
    pub(crate) fn builtin(id: &'static str) -> Self {
        debug_assert!(RuleId::new(id).is_some(), "invalid builtin rule id {id}");
        RuleId(id.to_string())
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value).ok_or_else(|| "Invalid rule ID".to_string())
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// A single flagged line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule that produced this issue
    pub rule_id: RuleId,

    #[serde(rename = "type")]
    pub kind: IssueKind,

    /// Line number (1-indexed)
    pub line: u32,

    pub message: String,

    /// The offending line, trimmed
    pub code: String,

    pub severity: Severity,
}

/// A whole-text improvement recommendation with an illustrative example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub title: String,
    pub description: String,
    pub example: String,
}

/// Aggregate counts describing the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of newline-separated segments
    pub lines: u32,

    /// Lines mentioning `function ` or `=> `
    pub functions: u32,

    /// Occurrences of `if `, `for `, `while ` and `switch `
    pub complexity: u32,

    /// Always [`MAINTAINABILITY_SCORE`]
    pub maintainability: u32,
}

/// The output of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub metrics: Metrics,
}

impl AnalysisReport {
    /// Returns true when no issues were found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues at the given severity
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Which part of a report to display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Issues, suggestions and metrics
    #[default]
    All,
    Issues,
    Suggestions,
    Metrics,
}

impl View {
    pub fn shows_issues(&self) -> bool {
        matches!(self, View::All | View::Issues)
    }

    pub fn shows_suggestions(&self) -> bool {
        matches!(self, View::All | View::Suggestions)
    }

    pub fn shows_metrics(&self) -> bool {
        matches!(self, View::All | View::Metrics)
    }
}
