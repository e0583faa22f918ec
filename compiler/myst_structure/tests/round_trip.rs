//! Property-based tests for the structurer.
//!
//! For scripts built from keyword-heavy fragments:
//! 1. Lossless: depth-first leaves reproduce the input.
//! 2. Every token appears in the tree exactly once, in order.
//! 3. Parent links agree with child lists.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use myst_structure::{GroupRef, NodeRef, Structurer};
use proptest::prelude::*;

// -- Input Strategies --

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BEGIN".to_owned()),
        Just("END".to_owned()),
        Just("IF".to_owned()),
        Just("if".to_owned()),
        Just("THEN".to_owned()),
        Just("ELSE".to_owned()),
        Just("CASE".to_owned()),
        Just("WHEN".to_owned()),
        Just("LOOP".to_owned()),
        Just("WHILE".to_owned()),
        Just("REPEAT".to_owned()),
        Just("UNTIL".to_owned()),
        Just("label".to_owned()),
        Just("`q`".to_owned()),
        Just("(".to_owned()),
        Just(")".to_owned()),
        Just(";".to_owned()),
        Just(",".to_owned()),
        Just(" ".to_owned()),
        Just("\n".to_owned()),
        Just("/*c*/".to_owned()),
        Just("-- c\n".to_owned()),
        Just("'s'".to_owned()),
        Just("'".to_owned()),
        "[a-z0-9]{1,4}",
    ]
}

fn script_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..60).prop_map(|parts| parts.join(" "))
}

/// Token texts in depth-first order, checking parent links on the way.
fn leaf_order(group: GroupRef<'_>, order: &mut Vec<String>) {
    for node in group.children() {
        match node {
            NodeRef::Token(token) => order.push(token.text().to_owned()),
            NodeRef::Group(child) => {
                assert_eq!(child.parent().map(GroupRef::id), Some(group.id()));
                leaf_order(child, order);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn tree_round_trips(source in script_strategy()) {
        let tree = Structurer::mysql().structure(&source);
        prop_assert_eq!(tree.to_source(), source);
    }

    #[test]
    fn arbitrary_text_round_trips(source in any::<String>()) {
        let tree = Structurer::mysql().structure(&source);
        prop_assert_eq!(tree.to_source(), source);
    }

    #[test]
    fn every_token_appears_once_in_order(source in script_strategy()) {
        let tree = Structurer::mysql().structure(&source);
        let mut order = Vec::new();
        leaf_order(tree.root(), &mut order);
        let expected: Vec<String> = tree.tokens().iter().map(|t| t.text().to_owned()).collect();
        prop_assert_eq!(order, expected);
    }
}

#[test]
fn structurer_is_shareable_across_threads() {
    let structurer = Structurer::mysql();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let structurer = structurer.clone();
            std::thread::spawn(move || {
                structurer
                    .structure(&format!("BEGIN SELECT {i}; END;"))
                    .to_source()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("BEGIN SELECT {i}; END;"));
    }
}

#[test]
fn try_structure_rejects_missing_input() {
    let structurer = Structurer::mysql();
    assert!(structurer.try_structure(None).is_err());
    let tree = structurer.try_structure(Some("")).unwrap();
    assert_eq!(tree.to_source(), "");
}
