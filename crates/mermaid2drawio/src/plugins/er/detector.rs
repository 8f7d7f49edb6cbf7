//! Entity-relationship diagram detector

use crate::core::{Detector, DiagramKind};

/// Detector for the `erDiagram` keyword
pub struct ErDetector;

impl ErDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ErDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ErDetector {
    fn keyword(&self) -> &'static str {
        DiagramKind::EntityRelationship.keyword()
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::EntityRelationship
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_keyword() {
        let detector = ErDetector::new();
        assert!(detector.detect("erDiagram\n    USER {}"));
        assert!(detector.detect("   erDiagram"));
        assert_eq!(detector.diagram_type(), "er");
    }

    #[test]
    fn test_rejects_other_dialects() {
        let detector = ErDetector::new();
        assert!(!detector.detect("sequenceDiagram\n    A->B: Hello"));
        assert!(!detector.detect("USER ||--o{ ORDER : places"));
        assert!(!detector.detect("ERDIAGRAM"));
    }

    #[test]
    fn test_confidence_scoring() {
        let detector = ErDetector::new();
        assert_eq!(detector.confidence("erDiagram\n  USER {}"), 1.0);
        assert_eq!(detector.confidence("%% schema\nerDiagram"), 0.5);
        assert_eq!(detector.confidence("USER {}"), 0.0);
    }
}
