//! Core error types for diagram conversion
//!
//! Parsing is best-effort, so most of these only surface at the edges of the
//! pipeline: reading input, choosing a dialect, or writing the document.

use thiserror::Error;

/// Core error types for diagram conversion
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Layout error: {message}")]
    LayoutError { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Unknown diagram type: {diagram_type}")]
    UnknownDiagramType { diagram_type: String },
}

impl DiagramError {
    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Create a new layout error
    pub fn layout_error(message: String) -> Self {
        Self::LayoutError { message }
    }

    /// Create a new serialization error
    pub fn serialization_error(message: String) -> Self {
        Self::Serialization { message }
    }

    /// Create an error for a dialect name nothing knows how to handle
    pub fn unknown_diagram_type(diagram_type: impl Into<String>) -> Self {
        Self::UnknownDiagramType {
            diagram_type: diagram_type.into(),
        }
    }
}

impl From<std::fmt::Error> for DiagramError {
    fn from(err: std::fmt::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let error = DiagramError::parse_error("Invalid syntax".to_string(), 5, 10);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Parse error"));
        assert!(error_msg.contains("Invalid syntax"));
        assert!(error_msg.contains("line 5"));
        assert!(error_msg.contains("column 10"));
    }

    #[test]
    fn test_serialization_error() {
        let error = DiagramError::serialization_error("writer closed".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Serialization error"));
        assert!(error_msg.contains("writer closed"));
    }

    #[test]
    fn test_fmt_error_conversion() {
        let error: DiagramError = std::fmt::Error.into();
        assert!(matches!(error, DiagramError::Serialization { .. }));
    }

    #[test]
    fn test_unknown_diagram_type() {
        let error = DiagramError::unknown_diagram_type("flowchart");
        assert_eq!(error.to_string(), "Unknown diagram type: flowchart");
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
