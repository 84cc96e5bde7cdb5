#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One issue record per issue, in detection order
//! 2. One suggestion record per suggestion
//! 3. One metrics record
//!
//! The view can drop any of the three groups.

use crate::types::{AnalysisReport, Issue, Metrics, Suggestion, View};
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter {
    view: View,
}

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new(view: View) -> Self {
        JsonlFormatter { view }
    }

    /// Format the report as JSONL
    pub fn format(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();

        if self.view.shows_issues() {
            for issue in &report.issues {
                push_record(
                    &mut output,
                    &IssueRecord {
                        record: "issue",
                        issue,
                    },
                );
            }
        }

        if self.view.shows_suggestions() {
            for (index, suggestion) in report.suggestions.iter().enumerate() {
                push_record(
                    &mut output,
                    &SuggestionRecord {
                        record: "suggestion",
                        index: index + 1,
                        suggestion,
                    },
                );
            }
        }

        if self.view.shows_metrics() {
            push_record(
                &mut output,
                &MetricsRecord {
                    record: "metrics",
                    metrics: &report.metrics,
                    issues: report.issues.len(),
                    suggestions: report.suggestions.len(),
                },
            );
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new(View::All)
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Issue record for JSONL output
#[derive(Debug, Serialize)]
struct IssueRecord<'a> {
    record: &'static str,
    #[serde(flatten)]
    issue: &'a Issue,
}

/// Suggestion record for JSONL output
#[derive(Debug, Serialize)]
struct SuggestionRecord<'a> {
    record: &'static str,
    /// Position in the report (1-indexed)
    index: usize,
    #[serde(flatten)]
    suggestion: &'a Suggestion,
}

/// Metrics record for JSONL output
#[derive(Debug, Serialize)]
struct MetricsRecord<'a> {
    record: &'static str,
    #[serde(flatten)]
    metrics: &'a Metrics,
    issues: usize,
    suggestions: usize,
}
