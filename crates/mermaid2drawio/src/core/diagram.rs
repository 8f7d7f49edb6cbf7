//! Diagram model shared by parsers and generators
//!
//! [`Diagram`] is closed: a value is either a sequence diagram or an
//! entity-relationship diagram, and every consumer matches both arms.

use std::fmt;
use std::str::FromStr;

use super::{Database, DiagramError};
use crate::plugins::er::ErDiagram;
use crate::plugins::sequence::SequenceDiagram;

/// The dialects this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiagramKind {
    /// `sequenceDiagram`, also the fallback when no keyword is found
    #[default]
    Sequence,
    /// `erDiagram`
    EntityRelationship,
}

impl DiagramKind {
    /// All dialects, in detection priority order
    pub const ALL: [DiagramKind; 2] = [DiagramKind::EntityRelationship, DiagramKind::Sequence];

    /// Short name used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramKind::Sequence => "sequence",
            DiagramKind::EntityRelationship => "er",
        }
    }

    /// Keyword line that announces this dialect
    pub fn keyword(&self) -> &'static str {
        match self {
            DiagramKind::Sequence => "sequenceDiagram",
            DiagramKind::EntityRelationship => "erDiagram",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Sequence => "Sequence diagrams with participants, lifelines and messages",
            DiagramKind::EntityRelationship => {
                "Entity-relationship diagrams with attributes and cardinalities"
            }
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequence" | "sequencediagram" => Ok(DiagramKind::Sequence),
            "er" | "erdiagram" => Ok(DiagramKind::EntityRelationship),
            _ => Err(DiagramError::unknown_diagram_type(s)),
        }
    }
}

/// A parsed diagram of either dialect
#[derive(Debug, Clone)]
pub enum Diagram {
    Sequence(SequenceDiagram),
    EntityRelationship(ErDiagram),
}

impl Diagram {
    pub fn kind(&self) -> DiagramKind {
        match self {
            Diagram::Sequence(_) => DiagramKind::Sequence,
            Diagram::EntityRelationship(_) => DiagramKind::EntityRelationship,
        }
    }

    /// Participants or entities
    pub fn node_count(&self) -> usize {
        match self {
            Diagram::Sequence(d) => d.node_count(),
            Diagram::EntityRelationship(d) => d.node_count(),
        }
    }

    /// Messages or relationships
    pub fn edge_count(&self) -> usize {
        match self {
            Diagram::Sequence(d) => d.edge_count(),
            Diagram::EntityRelationship(d) => d.edge_count(),
        }
    }
}
