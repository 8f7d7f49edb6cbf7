//! Core parser trait for diagram markup
//!
//! Parsing is best-effort: a line nothing recognizes is skipped, never
//! reported. The only failures a parser passes on come from the database it
//! writes into.

use anyhow::Result;

use super::Database;

/// Core trait for diagram parsers
pub trait Parser<D: Database>: Send + Sync {
    /// Parse diagram markup into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;
}

/// Lines every dialect ignores: blanks, `%%` comments and the keyword line
pub fn is_skippable_line(line: &str, keyword: &str) -> bool {
    line.is_empty() || line.starts_with("%%") || line.starts_with(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable_line("", "erDiagram"));
        assert!(is_skippable_line("%% note", "erDiagram"));
        assert!(is_skippable_line("erDiagram", "erDiagram"));
        assert!(!is_skippable_line("USER {", "erDiagram"));
        assert!(!is_skippable_line("% single percent", "erDiagram"));
    }
}
