//! Sequence diagram detector

use crate::core::{Detector, DiagramKind};

/// Detector for the `sequenceDiagram` keyword
pub struct SequenceDetector;

impl SequenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SequenceDetector {
    fn keyword(&self) -> &'static str {
        DiagramKind::Sequence.keyword()
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Sequence
    }
}
