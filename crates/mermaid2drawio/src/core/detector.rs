//! Core detector trait for dialect identification
//!
//! A dialect is announced by a keyword line (`sequenceDiagram`, `erDiagram`).
//! Detectors only answer "does this line announce my dialect"; picking the
//! first announcing line across all dialects is the orchestrator's job.

use super::DiagramKind;

/// Core trait for dialect detectors
pub trait Detector: Send + Sync {
    /// Keyword that opens a diagram of this dialect
    fn keyword(&self) -> &'static str;

    /// Dialect this detector recognizes
    fn kind(&self) -> DiagramKind;

    /// Whether a single (already trimmed) line announces this dialect
    fn detect_line(&self, line: &str) -> bool {
        line.starts_with(self.keyword())
    }

    /// Whether any line of the input announces this dialect
    fn detect(&self, input: &str) -> bool {
        input.lines().any(|line| self.detect_line(line.trim()))
    }

    /// Confidence (0.0 to 1.0) that the input is written in this dialect
    ///
    /// A keyword on the very first non-blank line is certain; a keyword further
    /// down still counts, but less.
    fn confidence(&self, input: &str) -> f64 {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        match lines.next() {
            Some(first) if self.detect_line(first) => 1.0,
            Some(_) if lines.any(|line| self.detect_line(line)) => 0.5,
            _ => 0.0,
        }
    }

    /// Get the dialect name
    fn diagram_type(&self) -> &'static str {
        self.kind().as_str()
    }
}
