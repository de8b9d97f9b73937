use bstr::{BStr, BString};
use core::fmt;
use thiserror::Error;

use crate::scanner::{ScanError, Token, TokenKind};

/// Failure of a [`decode`](crate::decode) call.
///
/// Decoding is fail-fast: the first fault is the only one reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input does not follow the grammar.
    #[error("line {line}: error {near}: {message}")]
    Syntax {
        /// 1-based line of the offending token.
        line: usize,
        /// The offending token text, or end of input.
        near: Near,
        /// What went wrong.
        message: SyntaxError,
    },
}

/// Longest token snippet kept in [`Near::Token`].
const NEAR_LIMIT: usize = 32;

impl DecodeError {
    pub(crate) fn at(token: &Token<'_>, message: SyntaxError) -> Self {
        let near = match token.kind {
            TokenKind::Eof => Near::End,
            _ => {
                let text: &[u8] = token.text;
                Near::Token(BString::from(text[..text.len().min(NEAR_LIMIT)].to_vec()))
            }
        };
        Self::Syntax {
            line: token.line,
            near,
            message,
        }
    }

    /// 1-based source line of the error.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Syntax { line, .. } => *line,
        }
    }

    /// The kind of syntax error.
    #[must_use]
    pub fn message(&self) -> SyntaxError {
        match self {
            Self::Syntax { message, .. } => *message,
        }
    }

    /// Where in the input the error was detected.
    #[must_use]
    pub fn near(&self) -> &Near {
        match self {
            Self::Syntax { near, .. } => near,
        }
    }
}

/// The input around a [`DecodeError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Near {
    /// Raw text of the offending token, cut to its first 32 bytes.
    Token(BString),
    /// The error was found at end of input.
    End,
}

impl Near {
    /// Raw text of the offending token, if the error was not at end of input.
    #[must_use]
    pub fn text(&self) -> Option<&BStr> {
        match self {
            Self::Token(text) => Some(BStr::new(text)),
            Self::End => None,
        }
    }
}

impl fmt::Display for Near {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(text) => write!(f, "at '{text}'"),
            Self::End => f.write_str("at end"),
        }
    }
}

/// Reason carried by [`DecodeError::Syntax`]. The `Display` output is the
/// message text shown to users.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// Input ended inside a string.
    #[error("Unterminated string")]
    UnterminatedString,
    /// A byte that cannot start a token.
    #[error("Unexpected character")]
    UnexpectedCharacter,
    /// An object key not followed by `:`.
    #[error("missing ':'")]
    MissingColon,
    /// Two elements not separated by `,`.
    #[error("missing ','")]
    MissingComma,
    /// A `,` directly before `]` or `}`.
    #[error("extra ','")]
    ExtraComma,
    /// An object key that is not a string.
    #[error("expected string key")]
    ExpectedStringKey,
    /// A `-` not followed by digits.
    #[error("expected number after '-'")]
    ExpectedNumber,
    /// A token that cannot start a value.
    #[error("unknown symbol")]
    UnknownSymbol,
    /// Arrays and objects nested beyond `max_depth`.
    #[error("nesting too deep")]
    NestingTooDeep,
    /// Input left after the value with `require_eof` set.
    #[error("unexpected trailing characters")]
    TrailingCharacters,
}

impl From<ScanError> for SyntaxError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::UnterminatedString => Self::UnterminatedString,
            ScanError::UnexpectedCharacter => Self::UnexpectedCharacter,
        }
    }
}

/// Failure of an [`encode`](crate::encode) call.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EncodeError {
    /// Only arrays and objects may be encoded at the top level.
    #[error("cannot encode {kind} at the top level, expected an array or object")]
    UnsupportedTopLevel {
        /// Name of the rejected value's variant.
        kind: &'static str,
    },
    /// The number has no exact integer rendering.
    #[error("cannot encode number {0}: only integral values are supported")]
    UnsupportedNumber(f64),
}
