#![forbid(unsafe_code)]

//! Line rules, suggestion templates and the registry that selects them

pub mod builtin;
pub mod registry;
mod rule;
pub mod suggestion;

// Re-export core types
pub use registry::RuleRegistry;
pub use rule::{LineRule, trim_source};
pub use suggestion::SuggestionTemplate;
