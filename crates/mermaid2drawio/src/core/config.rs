//! Layout and document configuration
//!
//! Every spacing, size and style string the generators use lives here. A
//! [`LayoutConfig`] is built once per conversion and handed to each generator;
//! nothing reads layout constants from global state.

use super::DiagramError;

/// Geometry and styles for entity-relationship diagrams
#[derive(Debug, Clone, PartialEq)]
pub struct ErLayout {
    /// Left edge of the first grid column
    pub start_x: f64,
    /// Top edge of the first grid row
    pub start_y: f64,
    /// Distance between grid columns and between grid rows
    pub entity_spacing: f64,
    /// Number of entities placed on one row before wrapping
    pub entities_per_row: usize,
    pub entity_width: f64,
    /// Height of the title band of an entity table
    pub entity_header_height: f64,
    /// Height of one attribute row
    pub attribute_height: f64,
    pub entity_style: String,
    pub attribute_style: String,
    pub relationship_style: String,
    pub primary_key_glyph: String,
    pub foreign_key_glyph: String,
}

impl Default for ErLayout {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            start_y: 50.0,
            entity_spacing: 300.0,
            entities_per_row: 3,
            entity_width: 200.0,
            entity_header_height: 30.0,
            attribute_height: 20.0,
            entity_style: "swimlane;fontStyle=1;align=center;verticalAlign=middle;childLayout=stackLayout;horizontal=1;startSize=30;horizontalStack=0;resizeParent=1;resizeParentMax=0;resizeLast=0;collapsible=0;marginBottom=0;whiteSpace=wrap;html=1;".to_string(),
            attribute_style: "text;strokeColor=none;fillColor=none;align=left;verticalAlign=middle;spacingLeft=4;spacingRight=4;overflow=hidden;points=[[0,0.5],[1,0.5]];portConstraint=eastwest;rotatable=0;whiteSpace=wrap;html=1;".to_string(),
            relationship_style: "endArrow=none;html=1;rounded=0;entryX=0;entryY=0.5;entryDx=0;entryDy=0;exitX=1;exitY=0.5;exitDx=0;exitDy=0;".to_string(),
            primary_key_glyph: "🔑".to_string(),
            foreign_key_glyph: "🔗".to_string(),
        }
    }
}

/// Geometry and styles for sequence diagrams
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceLayout {
    /// Left edge of the first participant box
    pub start_x: f64,
    /// Top edge shared by all participant boxes
    pub participant_y: f64,
    /// Horizontal distance between participant boxes
    pub participant_spacing: f64,
    pub participant_width: f64,
    pub participant_height: f64,
    /// Vertical room reserved per message along a lifeline
    pub message_spacing: f64,
    /// Shortest lifeline drawn, even for diagrams without messages
    pub lifeline_min_length: f64,
    pub participant_style: String,
    pub lifeline_style: String,
    pub solid_arrow_style: String,
    pub dashed_arrow_style: String,
    pub solid_cross_style: String,
    pub dashed_cross_style: String,
}

impl Default for SequenceLayout {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            participant_y: 50.0,
            participant_spacing: 200.0,
            participant_width: 100.0,
            participant_height: 50.0,
            message_spacing: 40.0,
            lifeline_min_length: 200.0,
            participant_style: "rounded=0;whiteSpace=wrap;html=1;".to_string(),
            lifeline_style: "endArrow=none;dashed=1;html=1;".to_string(),
            solid_arrow_style: "endArrow=classic;html=1;".to_string(),
            dashed_arrow_style: "endArrow=classic;html=1;dashed=1;".to_string(),
            solid_cross_style: "endArrow=block;endFill=1;html=1;".to_string(),
            dashed_cross_style: "endArrow=block;endFill=1;html=1;dashed=1;".to_string(),
        }
    }
}

/// Layout configuration shared by both generators
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutConfig {
    pub er: ErLayout,
    pub sequence: SequenceLayout,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override how many entities share one grid row
    pub fn with_entities_per_row(mut self, entities_per_row: usize) -> Self {
        self.er.entities_per_row = entities_per_row;
        self
    }

    /// Override the distance between neighbouring participants
    pub fn with_participant_spacing(mut self, spacing: f64) -> Self {
        self.sequence.participant_spacing = spacing;
        self
    }

    /// Check the values a generator divides or wraps by
    pub fn validate(&self) -> Result<(), DiagramError> {
        if self.er.entities_per_row == 0 {
            return Err(DiagramError::layout_error(
                "entities per row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Attributes written on the `mxGraphModel` root element
///
/// These are draw.io canvas defaults; no input ever changes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentConfig {
    pub dx: i32,
    pub dy: i32,
    pub grid: bool,
    pub grid_size: u32,
    pub guides: bool,
    pub tooltips: bool,
    pub connect: bool,
    pub arrows: bool,
    pub fold: bool,
    pub page: bool,
    pub page_scale: f64,
    pub page_width: u32,
    pub page_height: u32,
    pub math: bool,
    pub shadow: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            dx: 1234,
            dy: 732,
            grid: true,
            grid_size: 10,
            guides: true,
            tooltips: true,
            connect: true,
            arrows: true,
            fold: true,
            page: true,
            page_scale: 1.0,
            page_width: 827,
            page_height: 1169,
            math: false,
            shadow: false,
        }
    }
}
