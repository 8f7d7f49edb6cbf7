//! Shared chumsky combinators for line grammars
//!
//! Both dialects are line-oriented, so every grammar here runs on a single
//! trimmed line and never has to deal with newlines.

use chumsky::prelude::*;

/// Parse optional inline whitespace (spaces and tabs).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse at least one space or tab.
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Parse a word token: letters, digits and underscores.
///
/// Unlike `text::ident`, a word may start with a digit.
pub fn word<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| c.is_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse a run of non-whitespace characters.
pub fn token<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    none_of(" \t").repeated().at_least(1).to_slice()
}

/// Consume whatever is left of the line.
pub fn rest_of_line<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any().repeated().to_slice()
}
