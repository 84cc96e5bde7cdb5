#![forbid(unsafe_code)]

//! Human-readable report formatter
//!
//! Writes to any `termcolor::WriteColor`, so the same code renders coloured
//! output to a terminal and plain text into a buffer.

use crate::types::{AnalysisReport, Severity, View};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for analysis reports
pub struct HumanFormatter {
    view: View,
}

impl HumanFormatter {
    /// Create a formatter showing the given report sections
    pub fn new(view: View) -> Self {
        HumanFormatter { view }
    }

    /// Write the report sections selected by the view
    pub fn write(&self, out: &mut dyn WriteColor, report: &AnalysisReport) -> io::Result<()> {
        let mut first = true;

        if self.view.shows_issues() {
            write_issues(out, report)?;
            first = false;
        }

        if self.view.shows_suggestions() {
            if !first {
                writeln!(out)?;
            }
            write_suggestions(out, report)?;
            first = false;
        }

        if self.view.shows_metrics() {
            if !first {
                writeln!(out)?;
            }
            write_metrics(out, report)?;
        }

        Ok(())
    }

    /// Render the report to a plain (uncoloured) string
    pub fn format(&self, report: &AnalysisReport) -> io::Result<String> {
        let mut buffer = termcolor::Buffer::no_color();
        self.write(&mut buffer, report)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(View::All)
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

fn write_heading(out: &mut dyn WriteColor, heading: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", heading)?;
    out.reset()?;
    writeln!(out)
}

fn write_issues(out: &mut dyn WriteColor, report: &AnalysisReport) -> io::Result<()> {
    write_heading(out, &format!("Issues ({}):", report.issues.len()))?;

    if report.issues.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "  ✓ No issues found")?;
        out.reset()?;
        writeln!(out)?;
        return Ok(());
    }

    for issue in &report.issues {
        write!(out, "  line {}: ", issue.line)?;
        out.set_color(
            ColorSpec::new()
                .set_fg(Some(severity_color(issue.severity)))
                .set_bold(true),
        )?;
        write!(out, "{} [{}]", issue.kind, issue.severity)?;
        out.reset()?;
        writeln!(out, " {} ({})", issue.message, issue.rule_id)?;
        writeln!(out, "    {}", issue.code)?;
    }

    Ok(())
}

fn write_suggestions(out: &mut dyn WriteColor, report: &AnalysisReport) -> io::Result<()> {
    write_heading(out, &format!("Suggestions ({}):", report.suggestions.len()))?;

    if report.suggestions.is_empty() {
        writeln!(out, "  No suggestions")?;
        return Ok(());
    }

    for (index, suggestion) in report.suggestions.iter().enumerate() {
        write!(out, "  {}. ", index + 1)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "[{}]", suggestion.category)?;
        out.reset()?;
        writeln!(out, " {}", suggestion.title)?;
        writeln!(out, "     {}", suggestion.description)?;
        writeln!(out)?;
        for line in suggestion.example.lines() {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "       {}", line)?;
            }
        }
    }

    Ok(())
}

fn write_metrics(out: &mut dyn WriteColor, report: &AnalysisReport) -> io::Result<()> {
    let metrics = &report.metrics;
    write_heading(out, "Metrics:")?;
    writeln!(out, "  Lines of code:   {}", metrics.lines)?;
    writeln!(out, "  Functions:       {}", metrics.functions)?;
    writeln!(out, "  Complexity:      {}", metrics.complexity)?;
    writeln!(out, "  Maintainability: {}", metrics.maintainability)?;
    Ok(())
}
