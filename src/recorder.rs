//! Result recorder and report rendering.
//!
//! The recorder is an append-only, insertion-ordered log of check outcomes,
//! written by exactly one run at a time. Rendering reads the log without
//! touching it, so it may run more than once even though the orchestrator
//! only renders at the end of a run.

use serde::{Deserialize, Serialize};

// =============================================================================
// CORE TYPES
// =============================================================================

/// Classification of one recorded outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    Pass,
    Fail,
    Warning,
}

impl OutcomeKind {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeKind::Pass => "PASS",
            OutcomeKind::Fail => "FAIL",
            OutcomeKind::Warning => "WARN",
        }
    }
}

/// One recorded outcome. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

/// Append-only log of outcomes. Insertion order is display order; identical
/// messages are all kept.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<Outcome>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pass(&mut self, message: impl Into<String>) {
        self.push(OutcomeKind::Pass, message.into());
    }

    pub fn add_fail(&mut self, message: impl Into<String>) {
        self.push(OutcomeKind::Fail, message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.push(OutcomeKind::Warning, message.into());
    }

    fn push(&mut self, kind: OutcomeKind, message: String) {
        self.entries.push(Outcome { kind, message });
    }

    pub fn entries(&self) -> &[Outcome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Partitions the log into (passed, failed, warnings) counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        let passed = self
            .entries
            .iter()
            .filter(|o| o.kind == OutcomeKind::Pass)
            .count();
        let failed = self
            .entries
            .iter()
            .filter(|o| o.kind == OutcomeKind::Fail)
            .count();
        let warnings = self
            .entries
            .iter()
            .filter(|o| o.kind == OutcomeKind::Warning)
            .count();
        (passed, failed, warnings)
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|o| o.kind == OutcomeKind::Fail)
    }

    /// Renders the full ordered log into the sink: every entry in insertion
    /// order, then the summary line.
    pub fn render(&self, sink: &mut dyn ReportSink, style: &ReportStyle) {
        for outcome in &self.entries {
            sink.emit(&format!(
                "{}: {}",
                style.paint(outcome.kind, outcome.kind.label()),
                outcome.message
            ));
        }
        let (passed, failed, warnings) = self.counts();
        sink.emit(&format!(
            "Conformance summary: total {}, {} {}, {} {}, {} {}",
            self.entries.len(),
            style.colorize("passed", GREEN),
            passed,
            style.colorize("failed", RED),
            failed,
            style.colorize("warnings", YELLOW),
            warnings,
        ));
    }

    /// Serializes the outcome list for machine consumption.
    pub fn to_json(&self) -> Result<String, crate::error::HarnessError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

// =============================================================================
// REPORT SINKS
// =============================================================================

/// Output sink for the rendered report, to make rendering testable and
/// injectable.
pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Collects report lines into a String for tests or programmatic capture.
#[derive(Default)]
pub struct ReportBuffer {
    buffer: String,
}

impl ReportBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl ReportSink for ReportBuffer {
    fn emit(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

/// Writes report lines to stdout for the demo runner.
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

// =============================================================================
// REPORT STYLE
// =============================================================================

// Colour constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Colour configuration for report rendering.
pub struct ReportStyle {
    pub use_colors: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportStyle {
    /// A style that never emits colour codes.
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Colours a label according to its outcome kind.
    pub fn paint(&self, kind: OutcomeKind, text: &str) -> String {
        let color = match kind {
            OutcomeKind::Pass => GREEN,
            OutcomeKind::Fail => RED,
            OutcomeKind::Warning => YELLOW,
        };
        self.colorize(text, color)
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
