use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_quote_rules() {
    let rules = QuoteRules::default();
    assert_eq!(rules.get('\'').escape, Some('\\'));
    assert_eq!(rules.get('"').escape, Some('\\'));
    assert_eq!(rules.get('`').escape, None);
    assert!(rules.get('`').bmp_only);
    assert!(!rules.get('\'').bmp_only);
}

#[test]
fn mysql_builds_to_default_dialect() {
    assert_eq!(ScanConfig::mysql().build(), Ok(Dialect::mysql()));
}

#[test]
fn sql92_switches_comment_dialect() {
    let dialect = ScanConfig::sql92().build().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(dialect.patterns().comment_dialect(), CommentDialect::Sql92);
}

#[test]
fn quote_override_applies() {
    let dialect = ScanConfig::mysql()
        .with_quote_rule(
            '\'',
            QuoteRule {
                escape: None,
                bmp_only: true,
            },
        )
        .build()
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(dialect.quotes().get('\'').escape, None);
    assert!(dialect.quotes().get('\'').bmp_only);
    assert_eq!(dialect.quotes().get('"').escape, Some('\\'));
}

#[test]
fn quote_override_for_non_quote_is_rejected() {
    let result = ScanConfig::mysql()
        .with_quote_rule(
            '[',
            QuoteRule {
                escape: None,
                bmp_only: false,
            },
        )
        .build();
    assert_eq!(result, Err(ConfigError::UnknownQuote { quote: '[' }));
}

#[test]
fn invalid_operator_is_rejected() {
    let result = ScanConfig::mysql().with_operators(["+", "a+"]).build();
    assert_eq!(
        result,
        Err(ConfigError::InvalidOperator {
            operator: "a+".to_owned(),
            character: 'a',
        })
    );
}

#[test]
fn ascii_identifier_range_is_rejected() {
    let result = ScanConfig::mysql()
        .with_identifier_ranges(['a'..='z'])
        .build();
    assert_eq!(
        result,
        Err(ConfigError::InvalidIdentifierRange {
            start: 'a',
            end: 'z',
        })
    );
}

#[test]
fn reversed_identifier_range_is_rejected() {
    let result = ScanConfig::mysql()
        .with_identifier_ranges(['\u{FFFF}'..='\u{80}'])
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidIdentifierRange { .. })
    ));
}
