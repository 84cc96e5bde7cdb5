#![forbid(unsafe_code)]

//! Core LineRule trait for per-line checks

use crate::types::{Issue, IssueKind, RuleId, Severity};

/// Strip surrounding whitespace, treating a byte order mark (U+FEFF) as whitespace
pub fn trim_source(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trait that all line rules must implement
///
/// A line rule looks at one raw source line at a time and decides whether
/// it should be flagged. Rules never see neighbouring lines.
/// The trait is `Send + Sync` so a registry can be shared across threads.
pub trait LineRule: Send + Sync {
    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Kind of issue this rule reports
    fn kind(&self) -> IssueKind;

    /// Severity of issues from this rule
    fn severity(&self) -> Severity;

    /// Message attached to every issue from this rule
    fn message(&self) -> &str;

    /// Returns true if the raw (untrimmed) line should be flagged
    fn matches(&self, line: &str) -> bool;

    /// Check a single line, producing an issue if it matches
    ///
    /// `line_number` is 1-indexed.
    fn check(&self, line_number: u32, line: &str) -> Option<Issue> {
        if !self.matches(line) {
            return None;
        }

        Some(Issue {
            rule_id: self.id().clone(),
            kind: self.kind(),
            line: line_number,
            message: self.message().to_string(),
            code: trim_source(line).to_string(),
            severity: self.severity(),
        })
    }
}
