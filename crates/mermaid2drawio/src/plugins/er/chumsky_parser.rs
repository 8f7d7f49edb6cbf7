//! Entity-relationship line grammars using chumsky
//!
//! The ER parser is a small state machine, so instead of one statement
//! grammar there is one recognizer per line shape. Each takes a raw line and
//! its 1-based number and fails with [`DiagramError::ParseError`].

use chumsky::prelude::*;

use super::database::{Attribute, Relationship};
use crate::core::chumsky_utils::{
    inline_whitespace, inline_whitespace_required, rest_of_line, token, word,
};
use crate::core::DiagramError;

/// Opening line of an entity block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStart {
    pub name: String,
    /// `USER {}`: the block opens and closes on the same line
    pub is_empty_block: bool,
}

/// Constraint markers found after an attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub primary_key: bool,
    pub foreign_key: bool,
    pub unique: bool,
    pub not_null: bool,
}

impl Constraints {
    /// Decode the fragment after the attribute name
    ///
    /// Tokens are separated by whitespace or commas and compared ignoring
    /// case. A `"` starts the attribute comment and ends the fragment.
    pub fn decode(fragment: &str) -> Self {
        let fragment = fragment.split('"').next().unwrap_or_default();
        let tokens: Vec<String> = fragment
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_ascii_uppercase())
            .collect();

        let mut constraints = Constraints::default();
        for (i, t) in tokens.iter().enumerate() {
            match t.as_str() {
                "PK" => constraints.primary_key = true,
                "FK" => constraints.foreign_key = true,
                "UK" => constraints.unique = true,
                "NOT" if tokens.get(i + 1).is_some_and(|next| next == "NULL") => {
                    constraints.not_null = true
                }
                _ => {}
            }
        }
        constraints
    }

    fn apply(self, mut attribute: Attribute) -> Attribute {
        attribute.is_primary_key = self.primary_key;
        attribute.is_foreign_key = self.foreign_key;
        attribute.is_unique = self.unique;
        attribute.is_not_null = self.not_null;
        attribute
    }
}

fn column_of(line: &str) -> usize {
    line.len() - line.trim_start().len() + 1
}

/// Recognize `<name> {`, with anything after the brace
pub fn parse_entity_start(line: &str, line_no: usize) -> Result<EntityStart, DiagramError> {
    let trimmed = line.trim();
    entity_start_parser()
        .parse(trimmed)
        .into_result()
        .map(|name| EntityStart {
            name: name.to_string(),
            is_empty_block: trimmed.ends_with("{}"),
        })
        .map_err(|_| {
            DiagramError::parse_error(
                format!("expected entity block start, found '{}'", trimmed),
                line_no,
                column_of(line),
            )
        })
}

/// Recognize `<type> <name> [constraints] ["comment"]`
pub fn parse_attribute(line: &str, line_no: usize) -> Result<Attribute, DiagramError> {
    let trimmed = line.trim();
    attribute_parser()
        .parse(trimmed)
        .into_result()
        .map(|((data_type, name), rest)| {
            Constraints::decode(rest).apply(Attribute::new(name, data_type))
        })
        .map_err(|_| {
            DiagramError::parse_error(
                format!("expected attribute, found '{}'", trimmed),
                line_no,
                column_of(line),
            )
        })
}

/// Recognize `<from> <symbol...> <to> : <label>`
///
/// Split by hand rather than with a grammar: the symbol is whatever sits
/// between the first and last word, and only the first colon separates the
/// label.
pub fn parse_relationship(line: &str, line_no: usize) -> Result<Relationship, DiagramError> {
    let trimmed = line.trim();
    let err = |reason: &str| {
        DiagramError::parse_error(
            format!("{} in relationship '{}'", reason, trimmed),
            line_no,
            column_of(line),
        )
    };

    if !trimmed.contains("--") {
        return Err(err("missing connector"));
    }
    let (left, label) = trimmed
        .split_once(':')
        .ok_or_else(|| err("missing label separator"))?;

    let words: Vec<&str> = left.split_whitespace().collect();
    if words.len() < 3 {
        return Err(err("expected '<from> <symbol> <to>'"));
    }

    let from = words[0];
    let to = words[words.len() - 1];
    let symbol = words[1..words.len() - 1].join(" ");
    Ok(Relationship::from_symbol(from, to, &symbol, label.trim()))
}

fn entity_start_parser<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    word()
        .then_ignore(inline_whitespace())
        .then_ignore(just('{'))
        .then_ignore(rest_of_line())
}

fn attribute_parser<'src>(
) -> impl Parser<'src, &'src str, ((&'src str, &'src str), &'src str)> + Clone {
    token()
        .then_ignore(inline_whitespace_required())
        .then(word())
        .then(rest_of_line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::er::{Cardinality, RelationshipKind};

    #[test]
    fn test_entity_start() {
        let start = parse_entity_start("    USER {", 2).unwrap();
        assert_eq!(start.name, "USER");
        assert!(!start.is_empty_block);

        let start = parse_entity_start("ORDER{}", 3).unwrap();
        assert_eq!(start.name, "ORDER");
        assert!(start.is_empty_block);
    }

    #[test]
    fn test_entity_start_rejects_relationship() {
        assert!(parse_entity_start("USER ||--o{ ORDER : places", 1).is_err());
        assert!(parse_entity_start("USER", 1).is_err());
    }

    #[test]
    fn test_plain_attribute() {
        let attr = parse_attribute("        string name", 4).unwrap();
        assert_eq!(attr, Attribute::new("name", "string"));
    }

    #[test]
    fn test_attribute_type_is_free_form() {
        let attr = parse_attribute("varchar(255) email UK", 1).unwrap();
        assert_eq!(attr.data_type, "varchar(255)");
        assert_eq!(attr.name, "email");
        assert!(attr.is_unique);
    }

    #[test]
    fn test_attribute_constraints_combine() {
        let attr = parse_attribute("int user_id PK, FK", 1).unwrap();
        assert!(attr.is_primary_key);
        assert!(attr.is_foreign_key);
        assert!(!attr.is_unique);
        assert!(!attr.is_not_null);
    }

    #[test]
    fn test_attribute_constraints_ignore_case() {
        let attr = parse_attribute("int id pk not null", 1).unwrap();
        assert!(attr.is_primary_key);
        assert!(attr.is_not_null);
    }

    #[test]
    fn test_constraints_stop_at_comment() {
        let attr = parse_attribute(r#"string code "PK of the legacy table""#, 1).unwrap();
        assert!(!attr.is_primary_key);

        let attr = parse_attribute(r#"string code UK "unique code""#, 1).unwrap();
        assert!(attr.is_unique);
    }

    #[test]
    fn test_not_without_null_is_not_a_constraint() {
        let c = Constraints::decode("NOT");
        assert!(!c.not_null);
        let c = Constraints::decode("NULL NOT");
        assert!(!c.not_null);
    }

    #[test]
    fn test_attribute_needs_two_tokens() {
        let err = parse_attribute("    int", 9).unwrap_err();
        match err {
            DiagramError::ParseError { line, column, .. } => assert_eq!((line, column), (9, 5)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_relationship() {
        let rel = parse_relationship("USER ||--o{ ORDER : places", 1).unwrap();
        assert_eq!(rel.from, "USER");
        assert_eq!(rel.to, "ORDER");
        assert_eq!(rel.kind, RelationshipKind::OneToMany);
        assert_eq!(rel.from_cardinality, Cardinality::One);
        assert_eq!(rel.to_cardinality, Cardinality::Many);
        assert_eq!(rel.label, "places");
    }

    #[test]
    fn test_relationship_label_keeps_quotes_and_colons() {
        let rel = parse_relationship(r#"A }o--o{ B : "links: many""#, 1).unwrap();
        assert_eq!(rel.kind, RelationshipKind::ManyToMany);
        assert_eq!(rel.label, r#""links: many""#);
    }

    #[test]
    fn test_relationship_multi_token_symbol() {
        let rel = parse_relationship("A || -- o{ B : x", 1).unwrap();
        assert_eq!(rel.from, "A");
        assert_eq!(rel.to, "B");
        assert_eq!(rel.kind, RelationshipKind::OneToMany);
    }

    #[test]
    fn test_relationship_structural_mismatches() {
        assert!(parse_relationship("USER ||--o{ ORDER", 1).is_err());
        assert!(parse_relationship("USER ORDER : places", 1).is_err());
        assert!(parse_relationship("USER --ORDER : places", 1).is_err());
    }
}
