use pretty_assertions::assert_eq;

use super::*;
use myst_lexer::Tokenizer;

fn kw(keyword: &str) -> EndPattern {
    EndPattern::keyword(keyword)
}

fn single(source: &str) -> Token {
    let tokens = Tokenizer::mysql().tokenize(source);
    assert_eq!(tokens.len(), 1, "{source:?} should scan as one token");
    tokens[0].clone()
}

// === Defaults ===

#[test]
fn mysql_grammar_lists_every_compound() {
    let grammar = Grammar::mysql();
    let begins: Vec<&str> = grammar.compounds().iter().map(|c| &*c.begin).collect();
    assert_eq!(begins, ["BEGIN", "IF", "LOOP", "WHILE", "REPEAT", "CASE"]);
    assert_eq!(grammar.max_keyword_len(), 6);
    assert_eq!(grammar.statement_end(), [kw(";")]);
}

#[test]
fn only_case_has_an_inline_end() {
    let grammar = Grammar::mysql();
    for compound in grammar.compounds() {
        let expected = (&*compound.begin == "CASE").then(|| smallvec::smallvec![kw("END")]);
        assert_eq!(compound.inline_end, expected, "{}", compound.begin);
    }
}

#[test]
fn mysql_grammar_passes_validation() {
    let mysql = Grammar::mysql();
    let rebuilt = Grammar::new(
        mysql.compounds().to_vec(),
        mysql.brackets().to_vec(),
        &MYSQL_RESERVED_LABELS,
    );
    assert!(rebuilt.is_ok());
}

// === Keyword Comparison ===

#[test]
fn short_keywords_ignore_case() {
    let grammar = Grammar::mysql();
    assert!(grammar.keyword_eq("begin", "BEGIN"));
    assert!(grammar.keyword_eq("Repeat", "REPEAT"));
    assert!(grammar.keyword_eq(";", ";"));
    assert!(!grammar.keyword_eq("BEGINS", "BEGIN"));
}

#[test]
fn long_text_compares_exactly() {
    let grammar = Grammar::mysql();
    assert!(grammar.keyword_eq("ITERATE", "ITERATE"));
    assert!(!grammar.keyword_eq("iterate", "ITERATE"));
}

#[test]
fn compound_lookup_is_case_insensitive() {
    let grammar = Grammar::mysql();
    let (index, compound) = grammar.compound_for("while").unwrap();
    assert_eq!(index, 3);
    assert_eq!(&*compound.begin, "WHILE");
    assert!(grammar.compound_for("ELSEIF").is_none());
    assert!(grammar.compound_for("BEGINNING").is_none());
}

#[test]
fn bracket_lookup() {
    let grammar = Grammar::mysql();
    assert_eq!(grammar.bracket_for("(").map(|b| &*b.begin), Some("("));
    assert_eq!(grammar.bracket_for("when").map(|b| &*b.begin), Some("WHEN"));
    assert!(grammar.bracket_for(")").is_none());
}

// === Labels ===

#[test]
fn identifiers_and_backtick_names_are_labels() {
    let grammar = Grammar::mysql();
    assert!(grammar.is_label(&single("outer_loop")));
    assert!(grammar.is_label(&single("`my label`")));
}

#[test]
fn reserved_words_and_literals_are_not_labels() {
    let grammar = Grammar::mysql();
    assert!(!grammar.is_label(&single("loop")));
    assert!(!grammar.is_label(&single("IF")));
    assert!(!grammar.is_label(&single("'text'")));
    assert!(!grammar.is_label(&single("\"text\"")));
    assert!(!grammar.is_label(&single("42")));
    assert!(!grammar.is_label(&single(";")));
}

// === Validation ===

#[test]
fn rejects_empty_begin() {
    let result = Grammar::new(
        vec![CompoundDescriptor::new("", [kw("END")])],
        vec![],
        &MYSQL_RESERVED_LABELS,
    );
    assert_eq!(result.unwrap_err(), GrammarError::EmptyBegin);
}

#[test]
fn rejects_empty_end_sequence() {
    let result = Grammar::new(
        vec![],
        vec![BracketDescriptor::new("[", Vec::new())],
        &MYSQL_RESERVED_LABELS,
    );
    assert_eq!(
        result.unwrap_err(),
        GrammarError::EmptyEndSequence {
            begin: "[".to_owned()
        }
    );
}

#[test]
fn rejects_leading_optional_label() {
    let result = Grammar::new(
        vec![CompoundDescriptor::new(
            "BLOCK",
            [EndPattern::OptionalLabel, kw("END")],
        )],
        vec![],
        &MYSQL_RESERVED_LABELS,
    );
    assert_eq!(
        result.unwrap_err(),
        GrammarError::OptionalAtStart {
            begin: "BLOCK".to_owned()
        }
    );
}

#[test]
fn rejects_misplaced_skip_marker() {
    for end in [
        vec![EndPattern::SkipToEndOfLine, kw("END")],
        vec![kw("END"), EndPattern::SkipToEndOfLine],
    ] {
        let result = Grammar::new(
            vec![CompoundDescriptor::new("BLOCK", end)],
            vec![],
            &MYSQL_RESERVED_LABELS,
        );
        assert_eq!(
            result.unwrap_err(),
            GrammarError::MisplacedSkipToEndOfLine {
                begin: "BLOCK".to_owned()
            }
        );
    }
}

#[test]
fn validates_inline_end_too() {
    let compound = CompoundDescriptor::new("BLOCK", [kw("END")]).with_inline_end(Vec::new());
    let result = Grammar::new(vec![compound], vec![], &MYSQL_RESERVED_LABELS);
    assert!(matches!(
        result,
        Err(GrammarError::EmptyEndSequence { .. })
    ));
}

#[test]
fn custom_grammar_uses_its_own_keyword_length() {
    let grammar = Grammar::new(
        vec![CompoundDescriptor::new("DO", [kw("DONE")])],
        vec![],
        &["DO"],
    )
    .unwrap();
    assert_eq!(grammar.max_keyword_len(), 2);
    assert!(grammar.compound_for("do").is_some());
    assert!(!grammar.keyword_eq("done", "DONE"));
    assert!(grammar.keyword_eq("DONE", "DONE"));
}
