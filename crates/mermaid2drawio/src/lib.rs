//! mermaid2drawio - Convert Mermaid diagrams to draw.io XML
//!
//! A library for parsing Mermaid sequence and entity-relationship diagrams
//! and laying them out as a draw.io `mxGraphModel` document.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaid2drawio::convert;
//!
//! let input = "sequenceDiagram\n    A->B: Hello";
//! let xml = convert(input).unwrap();
//! assert!(xml.starts_with("<?xml"));
//! assert!(xml.contains(r#"value="Hello""#));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use mermaid2drawio::prelude::*;
//!
//! let input = "erDiagram\n    USER {\n        int id PK\n    }";
//!
//! // Parse into a database
//! let parser = ErParser::new();
//! let mut database = ErDiagram::new();
//! parser.parse(input, &mut database).unwrap();
//! assert_eq!(database.node_count(), 1);
//!
//! // Lay it out with a custom grid and serialize
//! let config = LayoutConfig::new().with_entities_per_row(1);
//! let cells = ErGenerator::with_config(config).generate(&database).unwrap();
//! let xml = GraphDocument::with_cells(DocumentConfig::default(), cells)
//!     .to_xml()
//!     .unwrap();
//! assert!(xml.contains("id: int"));
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Cell, Database, Detector, Diagram, DiagramError, DiagramKind, DocumentConfig, Generator,
        Geometry, GraphDocument, LayoutConfig, Parser,
    };
    pub use crate::plugins::er::{ErDetector, ErDiagram, ErGenerator, ErParser};
    pub use crate::plugins::orchestrator::Orchestrator;
    pub use crate::plugins::sequence::{
        SequenceDetector, SequenceDiagram, SequenceGenerator, SequenceParser,
    };
}

/// Convert Mermaid text to a draw.io XML document
///
/// The dialect is taken from the first `sequenceDiagram` or `erDiagram`
/// line; input with neither is read as a sequence diagram. Lines that are
/// not understood are skipped.
///
/// # Example
/// ```rust
/// use mermaid2drawio::convert;
///
/// let xml = convert("erDiagram\n    USER {}\n    ORDER {}\n    USER ||--o{ ORDER : places").unwrap();
/// assert!(xml.contains("startArrow=ERone;endArrow=ERmany;"));
/// ```
pub fn convert(input: &str) -> anyhow::Result<String> {
    plugins::orchestrator::Orchestrator::new().process(input)
}

/// Convert Mermaid text as the given dialect, skipping detection
pub fn convert_as(kind: DiagramKind, input: &str) -> anyhow::Result<String> {
    plugins::orchestrator::Orchestrator::new().process_as(kind, input)
}

/// Parse Mermaid text into a diagram without generating output
///
/// # Example
/// ```rust
/// use mermaid2drawio::{parse, Diagram};
///
/// let diagram = parse("sequenceDiagram\n    participant A as Alice\n    A->B: Test").unwrap();
/// let Diagram::Sequence(sequence) = diagram else { panic!("expected a sequence diagram") };
/// assert_eq!(sequence.participant_count(), 2);
/// ```
pub fn parse(input: &str) -> anyhow::Result<Diagram> {
    plugins::orchestrator::Orchestrator::new().parse(input)
}

/// Identify the dialect of Mermaid text
pub fn detect(input: &str) -> DiagramKind {
    plugins::orchestrator::Orchestrator::new().detect_diagram_type(input)
}
