//! Scanner: turns a byte slice into a lazy sequence of [`Token`]s.
//!
//! The scanner holds nothing but a cursor into the input and a line counter.
//! It never looks back, and the decoder never asks for more than one token
//! ahead, so a `Scanner` is cheap to create and is owned by exactly one
//! decode call.
//!
//! Classification
//! - Runs of lowercase ASCII letters are classified by their first letter
//!   only: `n` is [`TokenKind::Null`], `t` is [`TokenKind::True`], `f` is
//!   [`TokenKind::False`], anything else is an [`TokenKind::Identifier`].
//! - Numbers are `digits` or `digits.digits`. A sign is a separate
//!   [`TokenKind::Minus`] token.
//! - Strings run from `"` to the next `"`, byte for byte. A backslash has no
//!   special meaning, so `"a\"` is a complete string.
//! - Space, tab and carriage return are skipped; a newline is skipped and
//!   bumps the line counter. Newlines inside strings are counted as well.
//!
//! ```rust
//! use rawjson::{Scanner, TokenKind};
//!
//! let kinds: Vec<TokenKind> = Scanner::new(b"[-1, 2.5]").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::LBracket,
//!         TokenKind::Minus,
//!         TokenKind::Number,
//!         TokenKind::Comma,
//!         TokenKind::Number,
//!         TokenKind::RBracket,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use bstr::BStr;
use thiserror::Error;

/// Lexical failures reported through [`TokenKind::Error`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Input ended before the closing quote of a string.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A byte that cannot start any token.
    #[error("Unexpected character")]
    UnexpectedCharacter,
}

/// The class of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A lowercase word starting with `n`.
    Null,
    /// A lowercase word starting with `f`.
    False,
    /// A lowercase word starting with `t`.
    True,
    /// `digits` or `digits.digits`.
    Number,
    /// A quoted string, quotes included in the token text.
    String,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `:`
    Colon,
    /// Any other lowercase word.
    Identifier,
    /// A lexical error; the token text is the offending input.
    Error(ScanError),
    /// End of input.
    Eof,
}

/// A classified, positioned slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the scanner recognised.
    pub kind: TokenKind,
    /// The raw source bytes of the token. Empty for [`TokenKind::Eof`].
    pub text: &'src BStr,
    /// 1-based line on which the token started.
    pub line: usize,
}

impl Token<'_> {
    /// Returns `true` if the token is [`TokenKind::Eof`].
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Cursor over an input buffer producing one [`Token`] per call.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src [u8],
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the first byte of `source`, line 1.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            finished: false,
        }
    }

    /// Current 1-based line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();
        self.start = self.current;
        self.start_line = self.line;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        if c.is_ascii_lowercase() {
            return self.word();
        }
        if c.is_ascii_digit() {
            return self.number();
        }

        match c {
            b'{' => self.make_token(TokenKind::LBrace),
            b'}' => self.make_token(TokenKind::RBrace),
            b'[' => self.make_token(TokenKind::LBracket),
            b']' => self.make_token(TokenKind::RBracket),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b'-' => self.make_token(TokenKind::Minus),
            b':' => self.make_token(TokenKind::Colon),
            b'"' => self.string(),
            _ => self.make_token(TokenKind::Error(ScanError::UnexpectedCharacter)),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.get(self.current).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.source.get(self.current + 1).copied()
    }

    #[inline]
    fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\r' | b'\t' => {}
                b'\n' => self.line += 1,
                _ => return,
            }
            self.current += 1;
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token {
            kind,
            text: BStr::new(&self.source[self.start..self.current]),
            line: self.start_line,
        }
    }

    fn word(&mut self) -> Token<'src> {
        while self.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            self.current += 1;
        }
        let kind = match self.source[self.start] {
            b'n' => TokenKind::Null,
            b't' => TokenKind::True,
            b'f' => TokenKind::False,
            _ => TokenKind::Identifier,
        };
        self.make_token(kind)
    }

    fn number(&mut self) -> Token<'src> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.current += 1;
            }
        }
        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'src> {
        loop {
            match self.advance() {
                Some(b'"') => return self.make_token(TokenKind::String),
                Some(b'\n') => self.line += 1,
                Some(_) => {}
                None => {
                    return self.make_token(TokenKind::Error(ScanError::UnterminatedString));
                }
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl core::iter::FusedIterator for Scanner<'_> {}
