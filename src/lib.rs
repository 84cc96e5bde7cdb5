#![forbid(unsafe_code)]

//! jsreview: quick review of JavaScript source
//!
//! jsreview scans JavaScript text line by line with a handful of substring
//! rules and reports issues, improvement suggestions, and simple metrics.
//! It does not parse JavaScript.
//!
//! ```
//! let report = jsreview::scan("var x = 1;\n");
//! assert_eq!(report.issues.len(), 1);
//! assert_eq!(report.suggestions[0].category, "ES6+");
//! assert_eq!(report.metrics.maintainability, 85);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod session;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, ReviewError, RuleError};

// Re-export the scanner entry points
pub use engine::{Scanner, scan};

// Re-export core domain types for convenient access
pub use types::{AnalysisReport, Issue, IssueKind, Metrics, RuleId, Severity, Suggestion, View};
