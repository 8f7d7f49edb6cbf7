//! Sequence diagram plugin
//!
//! Converts UML sequence diagrams into draw.io participant boxes, lifelines
//! and message connectors.
//!
//! Syntax examples:
//! ```text
//! sequenceDiagram
//!     participant A as Alice
//!     A->>B: Hello
//!     B-->>A: Hi there
//! ```

mod chumsky_parser;
mod database;
mod detector;
mod generator;
mod parser;

pub use chumsky_parser::{parse_statement, Statement};
pub use database::{Message, MessageKind, Participant, SequenceDiagram};
pub use detector::SequenceDetector;
pub use generator::SequenceGenerator;
pub use parser::SequenceParser;
