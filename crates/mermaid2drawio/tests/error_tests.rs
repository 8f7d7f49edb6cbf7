//! Tests for core error types

use mermaid2drawio::core::{DiagramError, DiagramKind, LayoutConfig};
use mermaid2drawio::plugins::Orchestrator;

#[test]
fn test_parse_error() {
    let error = DiagramError::parse_error("Invalid syntax".to_string(), 5, 10);
    let error_msg = format!("{}", error);
    assert_eq!(error_msg, "Parse error: Invalid syntax at line 5, column 10");
}

#[test]
fn test_layout_error() {
    let error = DiagramError::layout_error("Layout failed".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Layout error"));
    assert!(error_msg.contains("Layout failed"));
}

#[test]
fn test_serialization_error() {
    let error = DiagramError::serialization_error("Write failed".to_string());
    assert_eq!(format!("{}", error), "Serialization error: Write failed");
}

#[test]
fn test_fmt_error_becomes_serialization_error() {
    let error: DiagramError = std::fmt::Error.into();
    assert!(matches!(error, DiagramError::Serialization { .. }));
}

#[test]
fn test_unknown_diagram_type() {
    let error = DiagramError::unknown_diagram_type("flowchart");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Unknown diagram type"));
    assert!(error_msg.contains("flowchart"));
}

#[test]
fn test_unknown_kind_name_is_rejected() {
    let error = "graph".parse::<DiagramKind>().unwrap_err();
    assert!(matches!(
        error,
        DiagramError::UnknownDiagramType { ref diagram_type } if diagram_type == "graph"
    ));
}

#[test]
fn test_io_error() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: DiagramError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("File not found"));
}

#[test]
fn test_layout_error_surfaces_through_pipeline() {
    let orchestrator =
        Orchestrator::new().with_layout(LayoutConfig::new().with_entities_per_row(0));
    let error = orchestrator.process("erDiagram\n    USER {}").unwrap_err();
    let diagram_error = error.downcast_ref::<DiagramError>().unwrap();
    assert!(matches!(diagram_error, DiagramError::LayoutError { .. }));
}

/// Characters outside the XML 1.0 `Char` production
fn is_disallowed_in_xml(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

#[test]
fn test_garbage_input_is_not_an_error() {
    let orchestrator = Orchestrator::new();
    let xml = orchestrator.process("}}}{{{ ->> :: -- \u{0}").unwrap();
    assert!(!xml.chars().any(is_disallowed_in_xml));
    assert!(orchestrator
        .process_as(DiagramKind::EntityRelationship, "}\n}\n{")
        .is_ok());
}

#[test]
fn test_control_characters_in_labels_keep_output_well_formed() {
    let xml = mermaid2drawio::convert(
        "sequenceDiagram\nparticipant A as Al\u{1}ice\nA->B: bell\u{7}here\nA->B: ff\u{c}here",
    )
    .unwrap();
    assert!(!xml.chars().any(is_disallowed_in_xml));
    assert!(xml.contains("value=\"bell\u{FFFD}here\""));
    assert!(xml.contains("value=\"ff\u{FFFD}here\""));
    assert!(xml.contains("value=\"Al\u{FFFD}ice\""));

    let xml =
        mermaid2drawio::convert("erDiagram\n    A {}\n    B {}\n    A ||--|| B : x\u{1B}y")
            .unwrap();
    assert!(xml.contains("value=\"x\u{FFFD}y\""));
}
