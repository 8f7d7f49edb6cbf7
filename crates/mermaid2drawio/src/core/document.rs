//! draw.io document model and XML serializer
//!
//! Generators produce a flat list of [`Cell`]s. [`GraphDocument`] wraps them
//! with the two structural cells every draw.io model starts with and writes
//! the `mxGraphModel` XML.
//!
//! Output is deterministic: attributes are always written in the same order
//! and numbers use their shortest decimal form.

use std::fmt::Write;

use super::{DiagramError, DocumentConfig};

/// Id of the structural root cell
pub const ROOT_CELL_ID: &str = "0";
/// Id of the default layer every diagram cell is parented to
pub const LAYER_CELL_ID: &str = "1";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// A point inside a geometry, such as a free edge end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position and size of a cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Set on edges so draw.io treats label offsets as relative
    pub relative: bool,
    pub source_point: Option<Point>,
    pub target_point: Option<Point>,
}

impl Geometry {
    /// Full bounding box of a vertex
    pub fn bounds(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Geometry of an edge whose ends come from its source and target cells
    pub fn edge() -> Self {
        Self {
            relative: true,
            ..Self::default()
        }
    }

    /// Geometry of a free-standing edge drawn between two points
    pub fn line(from: Point, to: Point) -> Self {
        Self {
            relative: true,
            source_point: Some(from),
            target_point: Some(to),
            ..Self::default()
        }
    }

    fn has_points(&self) -> bool {
        self.source_point.is_some() || self.target_point.is_some()
    }
}

/// One `mxCell` record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub id: String,
    pub value: Option<String>,
    pub style: Option<String>,
    pub vertex: bool,
    pub edge: bool,
    pub parent: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub geometry: Option<Geometry>,
}

impl Cell {
    /// A shape cell
    pub fn vertex(id: impl Into<String>, parent: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            vertex: true,
            parent: Some(parent.into()),
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    /// A connector cell
    pub fn edge(id: impl Into<String>, parent: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            edge: true,
            parent: Some(parent.into()),
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Attach both ends of a connector
    pub fn connecting(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.target = Some(target.into());
        self
    }
}

/// A complete draw.io graph model ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDocument {
    config: DocumentConfig,
    cells: Vec<Cell>,
}

impl GraphDocument {
    /// Create a document holding only the root and layer cells
    pub fn new(config: DocumentConfig) -> Self {
        let root = Cell {
            id: ROOT_CELL_ID.to_string(),
            ..Cell::default()
        };
        let layer = Cell {
            id: LAYER_CELL_ID.to_string(),
            parent: Some(ROOT_CELL_ID.to_string()),
            ..Cell::default()
        };
        Self {
            config,
            cells: vec![root, layer],
        }
    }

    /// Create a document around cells produced by a generator
    pub fn with_cells(config: DocumentConfig, cells: Vec<Cell>) -> Self {
        let mut document = Self::new(config);
        document.cells.extend(cells);
        document
    }

    /// All cells, structural ones first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Write the document as XML
    pub fn to_xml(&self) -> Result<String, DiagramError> {
        let mut out = String::new();
        writeln!(out, "{XML_DECLARATION}")?;
        self.write_model_open(&mut out)?;
        writeln!(out, "{INDENT}<root>")?;
        for cell in &self.cells {
            write_cell(&mut out, cell, 2)?;
        }
        writeln!(out, "{INDENT}</root>")?;
        write!(out, "</mxGraphModel>")?;
        Ok(out)
    }

    fn write_model_open(&self, out: &mut String) -> std::fmt::Result {
        let c = &self.config;
        write!(out, "<mxGraphModel")?;
        write_attr(out, "dx", &c.dx.to_string())?;
        write_attr(out, "dy", &c.dy.to_string())?;
        write_attr(out, "grid", flag(c.grid))?;
        write_attr(out, "gridSize", &c.grid_size.to_string())?;
        write_attr(out, "guides", flag(c.guides))?;
        write_attr(out, "tooltips", flag(c.tooltips))?;
        write_attr(out, "connect", flag(c.connect))?;
        write_attr(out, "arrows", flag(c.arrows))?;
        write_attr(out, "fold", flag(c.fold))?;
        write_attr(out, "page", flag(c.page))?;
        write_attr(out, "pageScale", &number(c.page_scale))?;
        write_attr(out, "pageWidth", &c.page_width.to_string())?;
        write_attr(out, "pageHeight", &c.page_height.to_string())?;
        write_attr(out, "math", flag(c.math))?;
        write_attr(out, "shadow", flag(c.shadow))?;
        writeln!(out, ">")
    }
}

fn write_cell(out: &mut String, cell: &Cell, depth: usize) -> std::fmt::Result {
    let indent = INDENT.repeat(depth);
    write!(out, "{indent}<mxCell")?;
    write_attr(out, "id", &cell.id)?;
    if let Some(value) = &cell.value {
        write_attr(out, "value", value)?;
    }
    if let Some(style) = &cell.style {
        write_attr(out, "style", style)?;
    }
    if cell.vertex {
        write_attr(out, "vertex", "1")?;
    }
    if cell.edge {
        write_attr(out, "edge", "1")?;
    }
    if let Some(parent) = &cell.parent {
        write_attr(out, "parent", parent)?;
    }
    if let Some(source) = &cell.source {
        write_attr(out, "source", source)?;
    }
    if let Some(target) = &cell.target {
        write_attr(out, "target", target)?;
    }

    match &cell.geometry {
        None => writeln!(out, " />"),
        Some(geometry) => {
            writeln!(out, ">")?;
            write_geometry(out, geometry, depth + 1)?;
            writeln!(out, "{indent}</mxCell>")
        }
    }
}

fn write_geometry(out: &mut String, geometry: &Geometry, depth: usize) -> std::fmt::Result {
    let indent = INDENT.repeat(depth);
    write!(out, "{indent}<mxGeometry")?;
    let dimensions = [
        ("x", geometry.x),
        ("y", geometry.y),
        ("width", geometry.width),
        ("height", geometry.height),
    ];
    for (name, value) in dimensions {
        if let Some(value) = value {
            write_attr(out, name, &number(value))?;
        }
    }
    if geometry.relative {
        write_attr(out, "relative", "1")?;
    }
    write_attr(out, "as", "geometry")?;

    if !geometry.has_points() {
        return writeln!(out, " />");
    }

    writeln!(out, ">")?;
    let points = [
        ("sourcePoint", geometry.source_point),
        ("targetPoint", geometry.target_point),
    ];
    for (role, point) in points {
        if let Some(point) = point {
            write!(out, "{indent}{INDENT}<mxPoint")?;
            write_attr(out, "x", &number(point.x))?;
            write_attr(out, "y", &number(point.y))?;
            write_attr(out, "as", role)?;
            writeln!(out, " />")?;
        }
    }
    writeln!(out, "{indent}</mxGeometry>")
}

fn write_attr(out: &mut String, name: &str, value: &str) -> std::fmt::Result {
    write!(out, " {name}=\"{}\"", escape(value))
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Shortest decimal form: `50` rather than `50.0`
fn number(value: f64) -> String {
    format!("{value}")
}

/// Escape text for use inside a double-quoted XML attribute
///
/// Characters XML 1.0 does not allow at all become U+FFFD.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            c if !is_xml_char(c) => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let xml = GraphDocument::new(DocumentConfig::default()).to_xml().unwrap();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxGraphModel dx="1234" dy="732" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="827" pageHeight="1169" math="0" shadow="0">
  <root>
    <mxCell id="0" />
    <mxCell id="1" parent="0" />
  </root>
</mxGraphModel>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_vertex_attribute_order() {
        let cell = Cell::vertex("v", LAYER_CELL_ID, Geometry::bounds(50.0, 60.5, 100.0, 50.0))
            .with_value("Box")
            .with_style("rounded=0;");
        let xml = GraphDocument::with_cells(DocumentConfig::default(), vec![cell])
            .to_xml()
            .unwrap();
        assert!(xml.contains(
            r#"<mxCell id="v" value="Box" style="rounded=0;" vertex="1" parent="1">"#
        ));
        assert!(xml.contains(
            r#"<mxGeometry x="50" y="60.5" width="100" height="50" as="geometry" />"#
        ));
    }

    #[test]
    fn test_edge_with_terminals() {
        let cell = Cell::edge("e", LAYER_CELL_ID, Geometry::edge())
            .with_value("")
            .connecting("a", "b");
        let xml = GraphDocument::with_cells(DocumentConfig::default(), vec![cell])
            .to_xml()
            .unwrap();
        assert!(xml.contains(
            r#"<mxCell id="e" value="" edge="1" parent="1" source="a" target="b">"#
        ));
        assert!(xml.contains(r#"<mxGeometry relative="1" as="geometry" />"#));
    }

    #[test]
    fn test_edge_with_points() {
        let geometry = Geometry::line(Point::new(100.0, 100.0), Point::new(100.0, 300.0));
        let cell = Cell::edge("l", LAYER_CELL_ID, geometry);
        let xml = GraphDocument::with_cells(DocumentConfig::default(), vec![cell])
            .to_xml()
            .unwrap();
        assert!(xml.contains(r#"<mxPoint x="100" y="100" as="sourcePoint" />"#));
        assert!(xml.contains(r#"<mxPoint x="100" y="300" as="targetPoint" />"#));
        assert!(xml.contains("      </mxGeometry>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b>&"c"'d'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;");
        assert_eq!(escape("line\nbreak"), "line&#xA;break");
        assert_eq!(escape("🔑 id: int"), "🔑 id: int");
    }

    #[test]
    fn test_escape_replaces_disallowed_characters() {
        assert_eq!(escape("bell\u{7}here"), "bell\u{FFFD}here");
        assert_eq!(escape("\u{0}\u{8}\u{B}\u{C}\u{E}\u{1F}"), "\u{FFFD}".repeat(6));
        assert_eq!(escape("no\u{FFFE}\u{FFFF}"), "no\u{FFFD}\u{FFFD}");
        assert_eq!(escape("tab\there"), "tab&#x9;here");
    }

    #[test]
    fn test_document_with_control_characters_stays_well_formed() {
        let cell =
            Cell::vertex("v", LAYER_CELL_ID, Geometry::default()).with_value("ff\u{C}here");
        let xml = GraphDocument::with_cells(DocumentConfig::default(), vec![cell])
            .to_xml()
            .unwrap();
        assert!(xml.contains("value=\"ff\u{FFFD}here\""));
        assert!(!xml.chars().any(|c| c.is_control() && c != '\n'));
    }

    #[test]
    fn test_structural_cells_first() {
        let doc = GraphDocument::with_cells(
            DocumentConfig::default(),
            vec![Cell::vertex("x", LAYER_CELL_ID, Geometry::default())],
        );
        let ids: Vec<_> = doc.cells().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "x"]);
    }
}
