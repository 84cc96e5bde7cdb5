#![forbid(unsafe_code)]

//! Whole-text suggestion templates
//!
//! A template fires at most once per scan, when its trigger substring
//! appears anywhere in the text. The suggestion content is fixed.

use crate::types::{RuleId, Suggestion};

pub const ARRAY_METHODS: &str = "array-methods";
pub const MODERN_DECLARATIONS: &str = "modern-declarations";

/// A fixed suggestion emitted when the text contains `trigger`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTemplate {
    pub id: &'static str,
    pub trigger: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

impl SuggestionTemplate {
    pub fn rule_id(&self) -> RuleId {
        RuleId::builtin(self.id)
    }

    /// Returns true if the whole text contains the trigger
    pub fn applies(&self, text: &str) -> bool {
        text.contains(self.trigger)
    }

    pub fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            example: self.example.to_string(),
        }
    }
}

pub const ARRAY_METHODS_TEMPLATE: SuggestionTemplate = SuggestionTemplate {
    id: ARRAY_METHODS,
    trigger: "for (",
    category: "Modern JavaScript",
    title: "Use Array Methods",
    description: "Consider using forEach, map, or reduce instead of traditional for loops",
    example: "// Instead of:
for (let i = 0; i < items.length; i++) {
  total += items[i].price;
}

// Use:
const total = items.reduce((sum, item) => sum + item.price, 0);",
};

pub const MODERN_DECLARATIONS_TEMPLATE: SuggestionTemplate = SuggestionTemplate {
    id: MODERN_DECLARATIONS,
    trigger: "var ",
    category: "ES6+",
    title: "Use Modern Variable Declarations",
    description: "Replace var with let or const for better scoping",
    example: "// Instead of:
var total = 0;

// Use:
let total = 0; // or const if value doesn't change",
};

/// All built-in templates in emission order
pub const BUILTIN_TEMPLATES: &[SuggestionTemplate] =
    &[ARRAY_METHODS_TEMPLATE, MODERN_DECLARATIONS_TEMPLATE];
