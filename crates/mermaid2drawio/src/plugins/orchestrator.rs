//! Plugin orchestrator for coordinating the conversion pipeline
//!
//! Detector → Parser → Database → Generator → Document
//!
//! Every call builds fresh parser state, so one orchestrator can serve any
//! number of conversions.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use crate::core::{
    Cell, Database, Detector, Diagram, DiagramKind, DocumentConfig, Generator, GraphDocument,
    LayoutConfig, Parser,
};
use crate::plugins::er::{ErDetector, ErDiagram, ErGenerator, ErParser};
use crate::plugins::sequence::{
    SequenceDetector, SequenceDiagram, SequenceGenerator, SequenceParser,
};

/// Plugin orchestrator that runs the whole conversion
pub struct Orchestrator {
    /// Checked in order against each line
    detectors: Vec<Box<dyn Detector>>,
    layout: LayoutConfig,
    document: DocumentConfig,
}

impl Orchestrator {
    /// Create an orchestrator with both dialects and default configuration
    pub fn new() -> Self {
        Self {
            detectors: vec![Box::new(ErDetector::new()), Box::new(SequenceDetector::new())],
            layout: LayoutConfig::default(),
            document: DocumentConfig::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_document_config(mut self, document: DocumentConfig) -> Self {
        self.document = document;
        self
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Names of the registered detectors, in priority order
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.diagram_type()).collect()
    }

    /// Find the dialect announced by the first keyword line
    ///
    /// Never fails: input without a keyword line is treated as a sequence
    /// diagram.
    pub fn detect_diagram_type(&self, input: &str) -> DiagramKind {
        let detect_span = span!(Level::INFO, "detect_diagram_type", input_len = input.len());
        let _enter = detect_span.enter();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if let Some(detector) = self.detectors.iter().find(|d| d.detect_line(line)) {
                info!(
                    diagram_type = detector.diagram_type(),
                    line = index + 1,
                    "Detected diagram type"
                );
                return detector.kind();
            }
        }

        debug!("No keyword line found, defaulting to sequence");
        DiagramKind::default()
    }

    /// Detect the dialect and parse the input into a diagram
    pub fn parse(&self, input: &str) -> Result<Diagram> {
        let kind = self.detect_diagram_type(input);
        self.parse_as(kind, input)
    }

    /// Parse the input as the given dialect, skipping detection
    pub fn parse_as(&self, kind: DiagramKind, input: &str) -> Result<Diagram> {
        let parse_span = span!(Level::DEBUG, "pipeline_parse", diagram_type = kind.as_str());
        let _enter = parse_span.enter();

        let diagram = match kind {
            DiagramKind::Sequence => {
                let mut database = SequenceDiagram::new();
                SequenceParser::new().parse(input, &mut database)?;
                Diagram::Sequence(database)
            }
            DiagramKind::EntityRelationship => {
                let mut database = ErDiagram::new();
                ErParser::new().parse(input, &mut database)?;
                Diagram::EntityRelationship(database)
            }
        };

        debug!(
            node_count = diagram.node_count(),
            edge_count = diagram.edge_count(),
            "Parsing completed"
        );
        Ok(diagram)
    }

    /// Lay out a parsed diagram as draw.io cells
    pub fn generate(&self, diagram: &Diagram) -> Result<Vec<Cell>> {
        let generate_span = span!(
            Level::DEBUG,
            "pipeline_generate",
            diagram_type = diagram.kind().as_str()
        );
        let _enter = generate_span.enter();

        let cells = match diagram {
            Diagram::Sequence(database) => {
                SequenceGenerator::with_config(self.layout.clone()).generate(database)?
            }
            Diagram::EntityRelationship(database) => {
                trace!(entities = database.node_count(), "Generating ER layout");
                ErGenerator::with_config(self.layout.clone()).generate(database)?
            }
        };

        debug!(cell_count = cells.len(), "Generation completed");
        Ok(cells)
    }

    /// Wrap a diagram's cells in a complete document
    pub fn document(&self, diagram: &Diagram) -> Result<GraphDocument> {
        let cells = self.generate(diagram)?;
        Ok(GraphDocument::with_cells(self.document, cells))
    }

    /// Convert input text to draw.io XML, detecting the dialect
    pub fn process(&self, input: &str) -> Result<String> {
        let process_span = span!(Level::INFO, "process_diagram", input_len = input.len());
        let _enter = process_span.enter();

        let kind = self.detect_diagram_type(input);
        self.process_as(kind, input)
    }

    /// Convert input text to draw.io XML as the given dialect
    pub fn process_as(&self, kind: DiagramKind, input: &str) -> Result<String> {
        info!(diagram_type = kind.as_str(), "Starting conversion pipeline");

        let diagram = self.parse_as(kind, input)?;
        let document = self.document(&diagram)?;

        let serialize_span = span!(Level::DEBUG, "pipeline_serialize");
        let _serialize_enter = serialize_span.enter();
        let xml = document.to_xml()?;
        debug!(output_len = xml.len(), "Serialization completed");
        drop(_serialize_enter);

        info!("Pipeline completed successfully");
        Ok(xml)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
