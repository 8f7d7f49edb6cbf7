//! Entity-relationship diagram parser
//!
//! A two-state machine over lines. Outside a block, lines open entities or
//! declare relationships; inside a block every line but `}` is an attribute
//! candidate.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::chumsky_parser::{parse_attribute, parse_entity_start, parse_relationship};
use super::database::{Entity, ErDiagram};
use crate::core::{is_skippable_line, DiagramKind, Parser};

/// Where the parser is relative to entity blocks
#[derive(Debug)]
enum State {
    Outside,
    InBlock(Entity),
}

/// Entity-relationship diagram parser
pub struct ErParser;

impl ErParser {
    pub fn new() -> Self {
        Self
    }

    /// Handle one line outside any block, returning the next state
    fn parse_outside(
        &self,
        raw: &str,
        line_no: usize,
        database: &mut ErDiagram,
    ) -> Result<State> {
        if let Ok(start) = parse_entity_start(raw, line_no) {
            let entity = Entity::new(start.name);
            if start.is_empty_block {
                trace!(entity = %entity.name, "Empty entity block");
                database.add_entity(entity)?;
                return Ok(State::Outside);
            }
            return Ok(State::InBlock(entity));
        }

        match parse_relationship(raw, line_no) {
            Ok(relationship) => database.add_relationship(relationship)?,
            Err(err) => trace!(error = %err, "Line ignored"),
        }
        Ok(State::Outside)
    }
}

impl Default for ErParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ErDiagram> for ErParser {
    fn parse(&self, input: &str, database: &mut ErDiagram) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_er", input_len = input.len());
        let _enter = parse_span.enter();

        let keyword = DiagramKind::EntityRelationship.keyword();
        let mut state = State::Outside;

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if is_skippable_line(line, keyword) {
                continue;
            }

            state = match state {
                State::Outside => self.parse_outside(raw, index + 1, database)?,
                State::InBlock(entity) if line == "}" => {
                    trace!(
                        entity = %entity.name,
                        attributes = entity.attributes.len(),
                        "Entity closed"
                    );
                    database.add_entity(entity)?;
                    State::Outside
                }
                State::InBlock(mut entity) => {
                    match parse_attribute(raw, index + 1) {
                        Ok(attribute) => entity.add_attribute(attribute),
                        Err(err) => trace!(error = %err, "Line ignored"),
                    }
                    State::InBlock(entity)
                }
            };
        }

        // An unterminated block still counts
        if let State::InBlock(entity) = state {
            debug!(entity = %entity.name, "Entity block not closed before end of input");
            database.add_entity(entity)?;
        }

        debug!(
            entities = database.entity_count(),
            relationships = database.relationship_count(),
            "Parsed ER diagram"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "er"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}
