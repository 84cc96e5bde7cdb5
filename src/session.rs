#![forbid(unsafe_code)]

//! Review session state
//!
//! `ReviewSession` is the state a front end keeps between user actions: the
//! code being edited, the last report, which view is active, the colour
//! theme, and whether an analysis is in progress. The scanner never sees
//! any of it.

use crate::engine::Scanner;
use crate::rules::trim_source;
use crate::types::{AnalysisReport, View};
use std::thread;
use std::time::Duration;

/// Program loaded by [`ReviewSession::load_sample`]
pub const SAMPLE_CODE: &str = r#"function calculateTotal(items) {
  var total = 0;
  for (var i = 0; i < items.length; i++) {
    if (items[i].price) {
      total = total + items[i].price;
    }
  }
  return total;
}

const user = {
  name: "Renuka",
  age: 25,
  email: "john@email.com"
};

function validateUser(user) {
  if (user.name == "" || user.age < 18) {
    return false;
  }
  return true;
}"#;

/// Colour theme of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug)]
pub struct ReviewSession {
    code: String,
    report: Option<AnalysisReport>,
    view: View,
    theme: Theme,
    analyzing: bool,
    scanner: Scanner,
    latency: Duration,
}

impl ReviewSession {
    /// New session with no code, no report, and no simulated latency
    pub fn new(scanner: Scanner) -> Self {
        Self {
            code: String::new(),
            report: None,
            view: View::Issues,
            theme: Theme::default(),
            analyzing: false,
            scanner,
            latency: Duration::ZERO,
        }
    }

    /// Wait this long before producing each report
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Replace the code with [`SAMPLE_CODE`]
    ///
    /// The current report is kept until the next analysis.
    pub fn load_sample(&mut self) {
        self.code = SAMPLE_CODE.to_string();
    }

    /// Drop both the code and the report
    pub fn clear(&mut self) {
        self.code.clear();
        self.report = None;
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Scan the current code and store the report
    ///
    /// Blank code is not analyzed: the previous report (if any) is left in
    /// place and `None` is returned.
    pub fn analyze(&mut self) -> Option<&AnalysisReport> {
        if !self.begin_analysis() {
            return None;
        }
        self.finish_analysis()
    }

    /// Mark an analysis as in progress
    ///
    /// Returns false, leaving the session untouched, when the code is blank.
    /// A front end can render its progress state between this call and
    /// [`finish_analysis`](Self::finish_analysis).
    pub fn begin_analysis(&mut self) -> bool {
        if trim_source(&self.code).is_empty() {
            return false;
        }
        self.analyzing = true;
        true
    }

    /// Wait out the simulated latency, then scan and store the report
    ///
    /// Returns `None` if no analysis was started.
    pub fn finish_analysis(&mut self) -> Option<&AnalysisReport> {
        if !self.analyzing {
            return None;
        }

        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        let report = self.scanner.scan(&self.code);
        self.analyzing = false;

        self.report = Some(report);
        self.report.as_ref()
    }

    /// Example text of the suggestion at `index` (0-indexed) in the current report
    pub fn copy_example(&self, index: usize) -> Option<&str> {
        self.report
            .as_ref()?
            .suggestions
            .get(index)
            .map(|suggestion| suggestion.example.as_str())
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new(Scanner::default())
    }
}
