#![forbid(unsafe_code)]

//! Line-rule scanner
//!
//! A scan is two independent passes over the same text:
//! - a per-line pass running every line rule and counting functions
//! - a whole-text pass running every suggestion template
//!
//! Scanning is total and deterministic. Any string, including the empty
//! string, yields a well-formed report.

use crate::engine::metrics::{self, to_u32};
use crate::rules::RuleRegistry;
use crate::types::{AnalysisReport, MAINTAINABILITY_SCORE, Metrics};

/// Runs the rules of a registry over source text
#[derive(Debug, Default)]
pub struct Scanner {
    registry: RuleRegistry,
}

impl Scanner {
    /// Creates a scanner over the given registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Scan `text` and build a report
    ///
    /// Issues come out in line order, and within a line in registry order.
    /// Metrics do not depend on which rules are enabled.
    pub fn scan(&self, text: &str) -> AnalysisReport {
        let mut issues = Vec::new();
        let mut functions = 0u32;

        for (index, line) in text.split('\n').enumerate() {
            let line_number = to_u32(index + 1);

            issues.extend(
                self.registry
                    .line_rules()
                    .filter_map(|rule| rule.check(line_number, line)),
            );

            if metrics::declares_function(line) {
                functions = functions.saturating_add(1);
            }
        }

        let suggestions = self
            .registry
            .templates()
            .iter()
            .filter(|template| template.applies(text))
            .map(|template| template.to_suggestion())
            .collect();

        AnalysisReport {
            issues,
            suggestions,
            metrics: Metrics {
                lines: metrics::line_count(text),
                functions,
                complexity: metrics::complexity_score(text),
                maintainability: MAINTAINABILITY_SCORE,
            },
        }
    }
}

/// Scan `text` with every built-in rule enabled
pub fn scan(text: &str) -> AnalysisReport {
    Scanner::default().scan(text)
}
