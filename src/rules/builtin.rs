#![forbid(unsafe_code)]

//! Built-in line rules
//!
//! Every rule here is a plain substring test on the raw line. None of them
//! tokenize JavaScript, so text inside string literals and comments is
//! matched like any other code.

use crate::rules::{LineRule, trim_source};
use crate::types::{IssueKind, RuleId, Severity};

pub const VAR_USAGE: &str = "var-usage";
pub const LOOSE_EQUALITY: &str = "loose-equality";
pub const MISSING_SEMICOLON: &str = "missing-semicolon";

/// Flags lines declaring variables with `var`
#[derive(Debug)]
pub struct VarUsage {
    id: RuleId,
}

impl VarUsage {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(VAR_USAGE),
        }
    }
}

impl Default for VarUsage {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for VarUsage {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Flags lines containing `var `"
    }

    fn kind(&self) -> IssueKind {
        IssueKind::Warning
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn message(&self) -> &str {
        "Use \"let\" or \"const\" instead of \"var\""
    }

    fn matches(&self, line: &str) -> bool {
        line.contains("var ")
    }
}

/// Flags ` == ` on lines that never use ` === `
#[derive(Debug)]
pub struct LooseEquality {
    id: RuleId,
}

impl LooseEquality {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(LOOSE_EQUALITY),
        }
    }
}

impl Default for LooseEquality {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for LooseEquality {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Flags ` == ` on lines without ` === `"
    }

    fn kind(&self) -> IssueKind {
        IssueKind::Error
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn message(&self) -> &str {
        "Use strict equality (===) instead of loose equality (==)"
    }

    fn matches(&self, line: &str) -> bool {
        // ` == ` never occurs inside ` === `, but a line mixing both is skipped
        line.contains(" == ") && !line.contains(" === ")
    }
}

/// Flags `return` lines that do not end in `;`, `{` or `}`
///
/// This only looks at lines containing `return ` and skips anything with a
/// `//` comment. It is not general semicolon detection.
#[derive(Debug)]
pub struct MissingSemicolon {
    id: RuleId,
}

impl MissingSemicolon {
    pub fn new() -> Self {
        Self {
            id: RuleId::builtin(MISSING_SEMICOLON),
        }
    }
}

impl Default for MissingSemicolon {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for MissingSemicolon {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        "Flags `return` statements without a trailing semicolon"
    }

    fn kind(&self) -> IssueKind {
        IssueKind::Warning
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn message(&self) -> &str {
        "Missing semicolon"
    }

    fn matches(&self, line: &str) -> bool {
        let trimmed = trim_source(line);
        !trimmed.is_empty()
            && !trimmed.ends_with([';', '{', '}'])
            && !line.contains("//")
            && line.contains("return ")
    }
}

/// All built-in line rules in check order
pub fn builtin_line_rules() -> Vec<Box<dyn LineRule>> {
    vec![
        Box::new(VarUsage::new()),
        Box::new(LooseEquality::new()),
        Box::new(MissingSemicolon::new()),
    ]
}
