//! Sequence diagram line grammar using chumsky
//!
//! Each non-skippable line is one statement. A line that matches no
//! statement comes back as a [`DiagramError::ParseError`]; the caller decides
//! whether that matters (it never does for sequence input).

use chumsky::prelude::*;

use super::database::MessageKind;
use crate::core::chumsky_utils::{inline_whitespace, inline_whitespace_required, rest_of_line, word};
use crate::core::DiagramError;

/// One recognized sequence line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `participant <name> [as <alias>]`
    Participant { name: String, alias: Option<String> },
    /// `<from> <arrow> <to> : <text>`
    Message {
        from: String,
        to: String,
        kind: MessageKind,
        text: String,
    },
    /// `activate <name>` or `deactivate <name>`
    Activation { name: String, active: bool },
}

/// Parse a single raw line (1-based `line_no`) into a statement
pub fn parse_statement(line: &str, line_no: usize) -> Result<Statement, DiagramError> {
    let trimmed = line.trim();
    let column = line.len() - line.trim_start().len() + 1;

    statement_parser()
        .then_ignore(end())
        .parse(trimmed)
        .into_result()
        .map_err(|_| {
            DiagramError::parse_error(
                format!("unrecognized sequence statement '{}'", trimmed),
                line_no,
                column,
            )
        })
}

fn statement_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
    participant_parser()
        .or(message_parser())
        .or(activation_parser())
}

fn participant_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
    // Alias runs to the end of the line and may contain spaces
    let alias = inline_whitespace_required()
        .ignore_then(just("as"))
        .ignore_then(inline_whitespace_required())
        .ignore_then(any().repeated().at_least(1).to_slice());

    just("participant")
        .ignore_then(inline_whitespace_required())
        .ignore_then(word())
        .then(alias.or_not())
        .then_ignore(rest_of_line())
        .map(|(name, alias): (&str, Option<&str>)| Statement::Participant {
            name: name.to_string(),
            alias: alias.map(|a| a.trim().to_string()),
        })
}

fn message_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
    // Longest first so `-->>` is not read as `-->` followed by `>`
    let arrow = just("-->>")
        .to(MessageKind::DashedArrowWithX)
        .or(just("->>").to(MessageKind::SolidArrowWithX))
        .or(just("-->").to(MessageKind::DashedArrow))
        .or(just("->").to(MessageKind::SolidArrow));

    word()
        .then_ignore(inline_whitespace())
        .then(arrow)
        .then_ignore(inline_whitespace())
        .then(word())
        .then_ignore(inline_whitespace())
        .then_ignore(just(':'))
        .then(rest_of_line())
        .map(|(((from, kind), to), text): (((&str, MessageKind), &str), &str)| {
            Statement::Message {
                from: from.to_string(),
                to: to.to_string(),
                kind,
                text: text.trim().to_string(),
            }
        })
}

fn activation_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
    just("deactivate")
        .to(false)
        .or(just("activate").to(true))
        .then_ignore(inline_whitespace_required())
        .then(word())
        .then_ignore(rest_of_line())
        .map(|(active, name): (bool, &str)| Statement::Activation {
            name: name.to_string(),
            active,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(from: &str, to: &str, kind: MessageKind, text: &str) -> Statement {
        Statement::Message {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_parse_participant() {
        assert_eq!(
            parse_statement("participant Alice", 1).unwrap(),
            Statement::Participant {
                name: "Alice".to_string(),
                alias: None
            }
        );
    }

    #[test]
    fn test_parse_participant_alias_with_spaces() {
        assert_eq!(
            parse_statement("    participant A as Alice Smith", 2).unwrap(),
            Statement::Participant {
                name: "A".to_string(),
                alias: Some("Alice Smith".to_string())
            }
        );
    }

    #[test]
    fn test_participant_without_alias_text() {
        // "as" needs something after it to count as an alias
        assert_eq!(
            parse_statement("participant A as", 1).unwrap(),
            Statement::Participant {
                name: "A".to_string(),
                alias: None
            }
        );
        assert_eq!(
            parse_statement("participant A asdf", 1).unwrap(),
            Statement::Participant {
                name: "A".to_string(),
                alias: None
            }
        );
    }

    #[test]
    fn test_parse_all_arrows() {
        assert_eq!(
            parse_statement("A->B: Hello", 1).unwrap(),
            message("A", "B", MessageKind::SolidArrow, "Hello")
        );
        assert_eq!(
            parse_statement("A-->B: Hello", 1).unwrap(),
            message("A", "B", MessageKind::DashedArrow, "Hello")
        );
        assert_eq!(
            parse_statement("A->>B: Hello", 1).unwrap(),
            message("A", "B", MessageKind::SolidArrowWithX, "Hello")
        );
        assert_eq!(
            parse_statement("A-->>B: Hello", 1).unwrap(),
            message("A", "B", MessageKind::DashedArrowWithX, "Hello")
        );
    }

    #[test]
    fn test_message_whitespace_is_optional() {
        assert_eq!(
            parse_statement("Alice  ->>  Bob  :   Hi there  ", 1).unwrap(),
            message("Alice", "Bob", MessageKind::SolidArrowWithX, "Hi there")
        );
        assert_eq!(
            parse_statement("A->B:", 1).unwrap(),
            message("A", "B", MessageKind::SolidArrow, "")
        );
    }

    #[test]
    fn test_message_text_keeps_colons() {
        assert_eq!(
            parse_statement("A->B: at 10:30", 1).unwrap(),
            message("A", "B", MessageKind::SolidArrow, "at 10:30")
        );
    }

    #[test]
    fn test_parse_activation() {
        assert_eq!(
            parse_statement("activate Alice", 1).unwrap(),
            Statement::Activation {
                name: "Alice".to_string(),
                active: true
            }
        );
        assert_eq!(
            parse_statement("deactivate Alice", 1).unwrap(),
            Statement::Activation {
                name: "Alice".to_string(),
                active: false
            }
        );
    }

    #[test]
    fn test_unrecognized_line_reports_position() {
        let err = parse_statement("   Note right of A: hi", 7).unwrap_err();
        match err {
            DiagramError::ParseError { line, column, .. } => {
                assert_eq!(line, 7);
                assert_eq!(column, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_without_colon_is_rejected() {
        assert!(parse_statement("A->B Hello", 1).is_err());
        assert!(parse_statement("A-x B: lost", 1).is_err());
    }
}
