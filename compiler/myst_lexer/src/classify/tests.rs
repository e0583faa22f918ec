use pretty_assertions::assert_eq;

use super::*;

// === is_whitespace ===

#[test]
fn whitespace_by_first_character() {
    assert!(is_whitespace(" "));
    assert!(is_whitespace("\t\t"));
    assert!(is_whitespace("\r\n"));
    assert!(is_whitespace("\nx"));
    assert!(!is_whitespace(""));
    assert!(!is_whitespace("x "));
    assert!(!is_whitespace("\u{a0}"));
}

// === is_comment ===

#[test]
fn comment_forms() {
    assert!(is_comment("#"));
    assert!(is_comment("# note"));
    assert!(is_comment("--"));
    assert!(is_comment("-- note"));
    assert!(is_comment("/**/"));
    assert!(is_comment("/* note */"));
}

#[test]
fn unterminated_block_is_not_a_comment() {
    assert!(!is_comment("/* open"));
    assert!(!is_comment("/*/"));
}

#[test]
fn operators_are_not_comments() {
    assert!(!is_comment("-"));
    assert!(!is_comment("/"));
    assert!(!is_comment("*/"));
    assert!(!is_comment(""));
}

// === is_quoted ===

#[test]
fn quoted_forms() {
    assert!(is_quoted("'a'"));
    assert!(is_quoted("\"a\""));
    assert!(is_quoted("`a`"));
    assert!(is_quoted("x'0A'"));
    assert!(is_quoted("B'01'"));
}

#[test]
fn not_quoted() {
    assert!(!is_quoted("abc"));
    assert!(!is_quoted("'open"));
    assert!(!is_quoted("@'var'"));
    assert!(!is_quoted("x"));
    assert!(!is_quoted(""));
}

// === split_on_spaces ===

#[test]
fn split_alternates_runs() {
    assert_eq!(
        split_on_spaces("SELECT  1\n\tFROM dual "),
        vec!["SELECT", "  ", "1", "\n\t", "FROM", " ", "dual", " "]
    );
}

#[test]
fn split_leading_space_and_empty() {
    assert_eq!(split_on_spaces(" a"), vec![" ", "a"]);
    assert_eq!(split_on_spaces(""), Vec::<&str>::new());
}

// ─── Property Tests ─────────────────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptests {
    use super::super::{is_whitespace, split_on_spaces};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn split_on_spaces_is_lossless(text in "[ a-z\\t\\n]{0,40}") {
            prop_assert_eq!(split_on_spaces(&text).concat(), text);
        }

        #[test]
        fn split_runs_alternate(text in "[ a-z\\t\\n]{1,40}") {
            let runs = split_on_spaces(&text);
            for pair in runs.windows(2) {
                prop_assert_ne!(is_whitespace(pair[0]), is_whitespace(pair[1]));
            }
        }
    }
}
