//! Token types produced by the scanner.

use std::fmt;

use crate::classify;
use crate::scan_error::{ScanDefect, ScanErrorKind};
use crate::Span;

/// Semantic kind of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Whitespace,
    Comment,
    /// `'...'`, `"..."`, `` `...` ``, `x'...'`, `b"..."`.
    Quoted,
    /// `0x1F`.
    HexNumber,
    /// `12`, `.5`, `1.5e-3`.
    Number,
    Identifier,
    /// `@var`, `@@session.var`, `@'quoted'`.
    AtIdentifier,
    Operator,
    /// Text the scanner could not classify; see [`Token::error`].
    Invalid,
}

impl TokenKind {
    /// Short lowercase name, for logs and test output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Quoted => "quoted",
            TokenKind::HexNumber => "hex-number",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::AtIdentifier => "at-identifier",
            TokenKind::Operator => "operator",
            TokenKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opening delimiter of a comment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentStyle {
    /// `# ...`
    Hash,
    /// `-- ...`
    DoubleDash,
    /// `/* ... */`
    Block,
}

impl CommentStyle {
    pub const fn opener(self) -> &'static str {
        match self {
            CommentStyle::Hash => "#",
            CommentStyle::DoubleDash => "--",
            CommentStyle::Block => "/*",
        }
    }
}

/// Which quote, prefix or delimiter combination produced a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// A quoted literal, with its `x`/`X`/`b`/`B` prefix if any.
    Quote { prefix: Option<char>, quote: char },
    /// A `@` or `@@` variable, quoted or not.
    At { sigils: u8, quote: Option<char> },
    /// An identifier segment directly after a `.`.
    AfterDot,
    Comment(CommentStyle),
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Marker::Quote { prefix, quote } => {
                if let Some(prefix) = prefix {
                    write!(f, "{prefix}")?;
                }
                write!(f, "{quote}")
            }
            Marker::At { sigils, quote } => {
                for _ in 0..sigils {
                    f.write_str("@")?;
                }
                if let Some(quote) = quote {
                    write!(f, "{quote}")?;
                }
                Ok(())
            }
            Marker::AfterDot => f.write_str("."),
            Marker::Comment(style) => f.write_str(style.opener()),
        }
    }
}

/// One classified piece of the input.
///
/// Concatenating the text of every token of a scan reproduces the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: TokenKind,
    span: Span,
    marker: Option<Marker>,
    error: Option<ScanErrorKind>,
    text: Box<str>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, span: Span, text: &str, marker: Option<Marker>) -> Self {
        Token {
            kind,
            span,
            marker,
            error: None,
            text: text.into(),
        }
    }

    pub(crate) fn invalid(
        error: ScanErrorKind,
        span: Span,
        text: &str,
        marker: Option<Marker>,
    ) -> Self {
        Token {
            kind: TokenKind::Invalid,
            span,
            marker,
            error: Some(error),
            text: text.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Why the token is invalid; `None` for valid tokens.
    #[inline]
    pub fn error(&self) -> Option<ScanErrorKind> {
        self.error
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.kind != TokenKind::Invalid
    }

    /// Whitespace or comment, judged from the token text alone.
    ///
    /// An unterminated block comment is not junk: it has no closing `*/`.
    #[inline]
    pub fn is_junk(&self) -> bool {
        classify::is_whitespace(&self.text) || classify::is_comment(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of a scan: the tokens and whether all of them are valid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
    valid: bool,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>, valid: bool) -> Self {
        TokenList { tokens, valid }
    }

    /// `false` once any invalid token was produced.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Every invalid token, in document order.
    pub fn defects(&self) -> impl Iterator<Item = ScanDefect> + '_ {
        self.tokens.iter().filter_map(|token| {
            token.error.map(|kind| ScanDefect {
                kind,
                span: token.span,
            })
        })
    }

    /// Concatenated token texts; equal to the scanned input.
    pub fn to_source(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
