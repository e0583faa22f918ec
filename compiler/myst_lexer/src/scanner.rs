//! The lossless scanner.
//!
//! One pass over the input, one token per step. Every byte of the input
//! ends up in exactly one token, so concatenating the token texts always
//! reproduces the input. Content problems never stop the scan: they become
//! [`TokenKind::Invalid`] tokens and clear the list's validity flag.
//!
//! # Dispatch
//!
//! Each step tries the recognizers in a fixed order and calls a focused
//! method that advances the cursor and pushes the token(s):
//!
//! 1. comment opener
//! 2. `0x` hex number
//! 3. decimal number (`.5`, `1`, `1.5e-3`)
//! 4. `@` variable
//! 5. quoted literal, with optional `x`/`b` prefix
//! 6. whitespace
//! 7. punctuation run
//! 8. identifier
//! 9. anything else, one character at a time

use crate::char_class;
use crate::config::Dialect;
use crate::cursor::Cursor;
use crate::scan_error::{MissingInput, ScanErrorKind};
use crate::token::{CommentStyle, Marker, Token, TokenKind, TokenList};
use crate::Span;

/// Single-use scanner over one input.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    dialect: &'a Dialect,
    tokens: Vec<Token>,
    valid: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, dialect: &'a Dialect) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            dialect,
            tokens: Vec::new(),
            valid: true,
        }
    }

    /// Like [`Scanner::new`], but for callers whose input may be absent.
    pub fn try_new(source: Option<&'a str>, dialect: &'a Dialect) -> Result<Self, MissingInput> {
        source
            .map(|source| Self::new(source, dialect))
            .ok_or(MissingInput)
    }

    /// Scan to the end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(mut self) -> TokenList {
        while !self.cursor.is_eof() {
            self.next_token();
        }
        tracing::debug!(
            tokens = self.tokens.len(),
            valid = self.valid,
            "scan complete"
        );
        TokenList::new(self.tokens, self.valid)
    }

    fn next_token(&mut self) {
        let dialect = self.dialect;
        let patterns = dialect.patterns();
        let start = self.cursor.pos();
        let rest = self.cursor.rest();
        let Some(c) = self.cursor.current() else {
            return;
        };

        if char_class::is_comment_initial(c) {
            if let Some(style) = patterns.comment_start(rest) {
                return self.comment(start, style);
            }
        }
        if let Some(len) = patterns.hex_number_len(rest) {
            return self.fixed(start, len, TokenKind::HexNumber);
        }
        if let Some(len) = patterns.number_len(rest) {
            return self.fixed(start, len, TokenKind::Number);
        }

        match c {
            '@' => self.at_identifier(start),
            c if char_class::is_quote(c) => self.quoted(start, None, c),
            c if char_class::is_binary_or_hex(c)
                && self.cursor.peek().is_some_and(char_class::is_prefixed_quote) =>
            {
                let quote = self.cursor.peek().unwrap_or(c);
                self.quoted(start, Some(c), quote);
            }
            c if char_class::is_whitespace(c) => {
                let len = patterns.whitespace_len(rest);
                self.fixed(start, len, TokenKind::Whitespace);
            }
            c if char_class::is_punctuation(c) => self.operator_run(),
            c if patterns.is_identifier_char(c) => self.identifier(start),
            _ => self.unrecognized(start),
        }
    }

    // ─── Token Construction ─────────────────────────────────────────────

    fn push(&mut self, kind: TokenKind, start: usize, marker: Option<Marker>) {
        let end = self.cursor.pos();
        let text = self.cursor.slice_from(start);
        self.tokens
            .push(Token::new(kind, Span::from_range(start..end), text, marker));
    }

    fn push_invalid(&mut self, error: ScanErrorKind, start: usize, marker: Option<Marker>) {
        let end = self.cursor.pos();
        let span = Span::from_range(start..end);
        tracing::trace!(%error, %span, "invalid token");
        let text = self.cursor.slice_from(start);
        self.tokens.push(Token::invalid(error, span, text, marker));
        self.valid = false;
    }

    fn fixed(&mut self, start: usize, len: usize, kind: TokenKind) {
        self.cursor.seek(start + len);
        self.push(kind, start, None);
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn comment(&mut self, start: usize, style: CommentStyle) {
        let marker = Some(Marker::Comment(style));
        match style {
            CommentStyle::Hash | CommentStyle::DoubleDash => {
                self.cursor.eat_until_line_end();
                self.push(TokenKind::Comment, start, marker);
            }
            CommentStyle::Block => {
                self.cursor.seek(start + 2);
                if self.cursor.eat_through("*/") {
                    self.push(TokenKind::Comment, start, marker);
                } else {
                    self.cursor.seek_eof();
                    self.push_invalid(ScanErrorKind::UnterminatedBlockComment, start, marker);
                }
            }
        }
    }

    // ─── Quoted Literals ────────────────────────────────────────────────

    fn quoted(&mut self, start: usize, prefix: Option<char>, quote: char) {
        if prefix.is_some() {
            self.cursor.advance();
        }
        self.cursor.advance();
        let marker = Some(Marker::Quote { prefix, quote });
        match self.quote_body(quote) {
            None => self.push(TokenKind::Quoted, start, marker),
            Some(error) => self.push_invalid(error, start, marker),
        }
    }

    /// Consume a quoted body up to and including the closing quote.
    ///
    /// The cursor must sit just past the opening quote. A doubled quote is
    /// part of the body; the escape character makes the next character
    /// literal.
    fn quote_body(&mut self, quote: char) -> Option<ScanErrorKind> {
        let rule = self.dialect.quotes().get(quote);
        let body_start = self.cursor.pos();
        let quote_byte = ascii_byte(quote);
        let escape_byte = rule.escape.and_then(ascii_byte);

        let closed = loop {
            match (quote_byte, rule.escape, escape_byte) {
                (Some(q), None, _) => {
                    self.cursor.eat_until_either(q, q);
                }
                (Some(q), Some(_), Some(e)) => {
                    self.cursor.eat_until_either(q, e);
                }
                _ => {
                    self.cursor
                        .eat_while(|c| c != quote && Some(c) != rule.escape);
                }
            }
            match self.cursor.advance() {
                None => break false,
                Some(c) if c == quote => {
                    if !self.cursor.eat(quote) {
                        break true;
                    }
                }
                Some(_) => {
                    // Escape: the next character is literal, even a quote.
                    self.cursor.advance();
                }
            }
        };

        if !closed {
            return Some(ScanErrorKind::UnterminatedQuote);
        }
        let body = self.cursor.slice_from(body_start);
        if rule.bmp_only && body.chars().any(char_class::is_supplementary) {
            return Some(ScanErrorKind::InvalidUnicodeInQuote);
        }
        None
    }

    // ─── Variables ──────────────────────────────────────────────────────

    fn at_identifier(&mut self, start: usize) {
        let dialect = self.dialect;
        let patterns = dialect.patterns();

        self.cursor.reset_lookahead();
        let mut sigils = 0usize;
        let mut next = self.cursor.look_ahead();
        while next == Some('@') {
            sigils += 1;
            next = self.cursor.look_ahead();
        }
        self.cursor.seek(start + sigils);
        let count = u8::try_from(sigils).unwrap_or(u8::MAX);

        if sigils > 2 {
            let marker = Some(Marker::At {
                sigils: count,
                quote: None,
            });
            return self.push_invalid(ScanErrorKind::TooManySigils, start, marker);
        }

        match next {
            Some(quote) if char_class::is_quote(quote) => {
                self.cursor.advance();
                let marker = Some(Marker::At {
                    sigils: count,
                    quote: Some(quote),
                });
                match self.quote_body(quote) {
                    None => self.push(TokenKind::AtIdentifier, start, marker),
                    Some(error) => self.push_invalid(error, start, marker),
                }
            }
            Some(c) if c == '.' || patterns.is_identifier_char(c) => {
                let len = patterns.identifier_after_at_len(self.cursor.rest());
                self.cursor.seek(self.cursor.pos() + len);
                let marker = Some(Marker::At {
                    sigils: count,
                    quote: None,
                });
                self.push(TokenKind::AtIdentifier, start, marker);
            }
            _ => {
                let marker = Some(Marker::At {
                    sigils: count,
                    quote: None,
                });
                self.push_invalid(ScanErrorKind::MalformedAtIdentifier, start, marker);
            }
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    /// An identifier, and any `.name` segments directly attached to it.
    fn identifier(&mut self, start: usize) {
        let dialect = self.dialect;
        let patterns = dialect.patterns();
        let mut start = start;
        loop {
            let marker = (self.cursor.previous() == Some('.')).then_some(Marker::AfterDot);
            let len = patterns.identifier_len(self.cursor.rest());
            self.cursor.seek(start + len);
            self.push(TokenKind::Identifier, start, marker);

            let dot = self.cursor.pos();
            if !self.cursor.eat('.') {
                return;
            }
            self.push(TokenKind::Operator, dot, None);
            match self.cursor.current() {
                Some(c) if patterns.is_identifier_char(c) => start = self.cursor.pos(),
                _ => return,
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────────────

    /// A run of punctuation, split into the longest known operators.
    ///
    /// Stops at the first non-punctuation character or comment opener.
    fn operator_run(&mut self) {
        let dialect = self.dialect;
        while let Some(c) = self.cursor.current() {
            let rest = self.cursor.rest();
            if !char_class::is_punctuation(c) || dialect.patterns().comment_start(rest).is_some() {
                break;
            }
            let start = self.cursor.pos();
            match dialect.operators().match_len(rest) {
                Some(len) => {
                    self.cursor.seek(start + len);
                    self.push(TokenKind::Operator, start, None);
                }
                None => {
                    self.cursor.advance();
                    self.push_invalid(ScanErrorKind::UnmatchedPunctuation, start, None);
                }
            }
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    fn unrecognized(&mut self, start: usize) {
        self.cursor.advance();
        self.push_invalid(ScanErrorKind::UnrecognizedCharacter, start, None);
    }
}

fn ascii_byte(c: char) -> Option<u8> {
    u8::try_from(c).ok().filter(u8::is_ascii)
}
