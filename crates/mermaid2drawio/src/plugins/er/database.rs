//! Entity-relationship diagram database implementation
//!
//! Stores entity tables and the relationships between them.

use std::fmt;

use anyhow::Result;

use crate::core::Database;

/// A column of an entity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Free-form type token, e.g. `int` or `varchar(255)`
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub is_unique: bool,
    pub is_not_null: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_foreign_key: false,
            is_unique: false,
            is_not_null: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }
}

/// An entity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    /// Columns in declaration order
    pub attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

/// How many rows one side of a relationship takes part with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::One => "1",
            Cardinality::Many => "M",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a relationship
///
/// The symbol decoder only distinguishes one from many, so `Identifying`
/// and `NonIdentifying` are never produced by parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    Identifying,
    NonIdentifying,
}

impl RelationshipKind {
    pub fn from_cardinalities(from: Cardinality, to: Cardinality) -> Self {
        match (from, to) {
            (Cardinality::One, Cardinality::One) => RelationshipKind::OneToOne,
            (Cardinality::One, Cardinality::Many) => RelationshipKind::OneToMany,
            (Cardinality::Many, Cardinality::One) => RelationshipKind::ManyToOne,
            (Cardinality::Many, Cardinality::Many) => RelationshipKind::ManyToMany,
        }
    }
}

/// Decode a cardinality symbol such as `||--o{`
///
/// `{` anywhere makes the target side many, `}` anywhere makes the source
/// side many. The line style between the markers is not inspected.
pub fn decode_cardinality(symbol: &str) -> (RelationshipKind, Cardinality, Cardinality) {
    let from = if symbol.contains('}') {
        Cardinality::Many
    } else {
        Cardinality::One
    };
    let to = if symbol.contains('{') {
        Cardinality::Many
    } else {
        Cardinality::One
    };
    (RelationshipKind::from_cardinalities(from, to), from, to)
}

/// A relationship between two entities
///
/// Endpoints are plain names and may refer to entities that were never
/// declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub kind: RelationshipKind,
    pub from_cardinality: Cardinality,
    pub to_cardinality: Cardinality,
    pub label: String,
}

impl Relationship {
    /// Build a relationship from its cardinality symbol
    pub fn from_symbol(
        from: impl Into<String>,
        to: impl Into<String>,
        symbol: &str,
        label: impl Into<String>,
    ) -> Self {
        let (kind, from_cardinality, to_cardinality) = decode_cardinality(symbol);
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            from_cardinality,
            to_cardinality,
            label: label.into(),
        }
    }
}

/// Entity-relationship diagram
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErDiagram {
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
}

impl ErDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity; a repeated name becomes a second table
    pub fn add_entity(&mut self, entity: Entity) -> Result<()> {
        self.entities.push(entity);
        Ok(())
    }

    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<()> {
        self.relationships.push(relationship);
        Ok(())
    }

    /// Entities in declaration order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Most recent declaration of an entity
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().rev().find(|e| e.name == name)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn clear_all(&mut self) {
        self.entities.clear();
        self.relationships.clear();
    }
}

/// Maps Entity to Node and Relationship to Edge
impl Database for ErDiagram {
    type Node = Entity;
    type Edge = Relationship;

    fn add_node(&mut self, node: Self::Node) -> Result<()> {
        self.add_entity(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        self.add_relationship(edge)
    }

    fn get_node(&self, name: &str) -> Option<&Self::Node> {
        self.entity(name)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.entities.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relationships.iter()
    }

    fn clear(&mut self) {
        self.clear_all()
    }

    fn node_count(&self) -> usize {
        self.entity_count()
    }

    fn edge_count(&self) -> usize {
        self.relationship_count()
    }
}
