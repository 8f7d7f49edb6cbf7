//! Sequence diagram parser
//!
//! Feeds each line through the statement grammar and records participants
//! and messages in the database.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::chumsky_parser::{parse_statement, Statement};
use super::database::{Message, Participant, SequenceDiagram};
use crate::core::{is_skippable_line, DiagramKind, Parser};

/// Sequence diagram parser
pub struct SequenceParser;

impl SequenceParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<SequenceDiagram> for SequenceParser {
    fn parse(&self, input: &str, database: &mut SequenceDiagram) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_sequence", input_len = input.len());
        let _enter = parse_span.enter();

        let keyword = DiagramKind::Sequence.keyword();
        let mut ignored = 0usize;

        for (index, raw) in input.lines().enumerate() {
            if is_skippable_line(raw.trim(), keyword) {
                continue;
            }

            match parse_statement(raw, index + 1) {
                Ok(Statement::Participant { name, alias }) => {
                    let participant = match alias {
                        Some(alias) => Participant::with_alias(name, alias),
                        None => Participant::new(name),
                    };
                    database.add_participant(participant)?;
                }
                Ok(Statement::Message {
                    from,
                    to,
                    kind,
                    text,
                }) => {
                    database.add_message(Message::new(from, to, text).with_kind(kind))?;
                }
                Ok(Statement::Activation { name, active }) => {
                    // Activation bars are not drawn
                    trace!(participant = %name, active, "Activation ignored");
                }
                Err(err) => {
                    ignored += 1;
                    trace!(error = %err, "Line ignored");
                }
            }
        }

        debug!(
            participants = database.participant_count(),
            messages = database.message_count(),
            ignored,
            "Parsed sequence diagram"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sequence"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Database;
    use crate::plugins::sequence::MessageKind;

    fn parse(input: &str) -> SequenceDiagram {
        let mut db = SequenceDiagram::new();
        SequenceParser::new().parse(input, &mut db).unwrap();
        db
    }

    #[test]
    fn test_parse_simple_message() {
        let db = parse("sequenceDiagram\n    A->B: Hello");
        assert_eq!(db.participant_count(), 2);
        assert_eq!(db.message_count(), 1);

        let msg = &db.messages()[0];
        assert_eq!(msg.from, "A");
        assert_eq!(msg.to, "B");
        assert_eq!(msg.text, "Hello");
        assert_eq!(msg.kind, MessageKind::SolidArrow);
    }

    #[test]
    fn test_declared_alias_and_synthesized_receiver() {
        let db = parse("sequenceDiagram\n    participant A as Alice\n    A->B: Test");
        let labels: Vec<_> = db.participants().map(|p| p.alias.as_str()).collect();
        assert_eq!(labels, vec!["Alice", "B"]);
    }

    #[test]
    fn test_synthesis_order_from_then_to() {
        let db = parse("sequenceDiagram\n    C->B: one\n    A->C: two");
        let names: Vec<_> = db.participants().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_skips_comments_activation_and_noise() {
        let input = "sequenceDiagram\n\
                     %% a comment\n\
                     \n\
                     activate A\n\
                     Note over A: ignored\n\
                     loop Every minute\n\
                     A-->>B: ping\n\
                     end\n\
                     deactivate A";
        let db = parse(input);
        assert_eq!(db.participant_count(), 2);
        assert_eq!(db.message_count(), 1);
        assert_eq!(db.messages()[0].kind, MessageKind::DashedArrowWithX);
    }

    #[test]
    fn test_message_before_declaration_keeps_plain_label() {
        let db = parse("sequenceDiagram\n    A->B: hi\n    participant A as Alice");
        assert_eq!(db.get_node("A").unwrap().alias, "A");
    }

    #[test]
    fn test_crlf_input() {
        let db = parse("sequenceDiagram\r\n    A->B: Hello\r\n");
        assert_eq!(db.messages()[0].text, "Hello");
    }

    #[test]
    fn test_empty_input() {
        let db = parse("");
        assert_eq!(db.participant_count(), 0);
        assert_eq!(db.message_count(), 0);
    }
}
