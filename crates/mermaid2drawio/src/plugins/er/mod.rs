//! Entity-relationship diagram plugin
//!
//! Converts ER diagrams into draw.io entity tables and crow's-foot
//! connectors.
//!
//! Syntax examples:
//! ```text
//! erDiagram
//!     USER {
//!         int id PK
//!         string email UK
//!     }
//!     ORDER {}
//!     USER ||--o{ ORDER : places
//! ```

mod chumsky_parser;
mod database;
mod detector;
mod generator;
mod parser;

pub use chumsky_parser::{
    parse_attribute, parse_entity_start, parse_relationship, Constraints, EntityStart,
};
pub use database::{
    decode_cardinality, Attribute, Cardinality, Entity, ErDiagram, Relationship,
    RelationshipKind,
};
pub use detector::ErDetector;
pub use generator::ErGenerator;
pub use parser::ErParser;
