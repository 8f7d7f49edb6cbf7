//! Property tests for parsing and layout invariants

use mermaid2drawio::plugins::er::{
    decode_cardinality, parse_attribute, Cardinality, RelationshipKind,
};
use mermaid2drawio::prelude::*;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z0-9_]{0,6}"
}

proptest! {
    /// Participants appear in first-use order, source before target
    #[test]
    fn participant_order_follows_first_use(
        pairs in prop::collection::vec((name(), name()), 0..12)
    ) {
        let mut input = String::from("sequenceDiagram\n");
        let mut expected: Vec<String> = Vec::new();
        for (from, to) in &pairs {
            input.push_str(&format!("    {}->{}: m\n", from, to));
            for n in [from, to] {
                if !expected.contains(n) {
                    expected.push(n.clone());
                }
            }
        }

        let mut db = SequenceDiagram::new();
        SequenceParser::new().parse(&input, &mut db).unwrap();

        let actual: Vec<String> = db.participants().map(|p| p.name.clone()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(db.message_count(), pairs.len());
    }

    /// Each constraint sets exactly its own flag and label decoration
    #[test]
    fn constraint_flags_are_independent(pk: bool, fk: bool, uk: bool, nn: bool) {
        let mut constraints = Vec::new();
        if pk { constraints.push("PK"); }
        if fk { constraints.push("FK"); }
        if uk { constraints.push("UK"); }
        if nn { constraints.push("NOT NULL"); }
        let line = format!("int col {}", constraints.join(", "));

        let attribute = parse_attribute(&line, 1).unwrap();
        prop_assert_eq!(attribute.is_primary_key, pk);
        prop_assert_eq!(attribute.is_foreign_key, fk);
        prop_assert_eq!(attribute.is_unique, uk);
        prop_assert_eq!(attribute.is_not_null, nn);

        let label = ErGenerator::new().attribute_label(&attribute);
        prop_assert_eq!(label.contains("🔑"), pk);
        prop_assert_eq!(label.contains("🔗"), fk);
        prop_assert_eq!(label.contains(" (UK)"), uk);
        prop_assert_eq!(label.contains(" (NN)"), nn);
        prop_assert!(label.contains("col: int"));
    }

    /// Any symbol decodes to one of the four cardinality kinds
    #[test]
    fn cardinality_decoding_is_total(symbol in "\\PC{0,8}") {
        let (kind, from, to) = decode_cardinality(&symbol);
        prop_assert_eq!(from == Cardinality::Many, symbol.contains('}'));
        prop_assert_eq!(to == Cardinality::Many, symbol.contains('{'));
        prop_assert_eq!(kind, RelationshipKind::from_cardinalities(from, to));
        prop_assert!(!matches!(
            kind,
            RelationshipKind::Identifying | RelationshipKind::NonIdentifying
        ));
    }

    /// Conversion never fails on arbitrary text with the default layout
    #[test]
    fn conversion_accepts_any_text(input in "\\PC{0,200}") {
        prop_assert!(mermaid2drawio::convert(&input).is_ok());
    }
}
