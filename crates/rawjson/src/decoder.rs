//! Recursive-descent decoder.
//!
//! The decoder pulls one token at a time from its own [`Scanner`] and builds
//! the [`Value`] tree on the way back up. It never looks more than one token
//! ahead and makes no attempt to recover: the first fault is turned into a
//! [`DecodeError`] and unwinds the whole call, so no partial tree escapes.

use bstr::BString;

use crate::{
    error::{DecodeError, SyntaxError},
    options::DecodeOptions,
    scanner::{Scanner, Token, TokenKind},
    value::{Array, Map, Value},
};

/// Decodes a complete document with [`DecodeOptions::default`].
///
/// Bytes after the first complete value are ignored; use [`decode_with`] and
/// [`DecodeOptions::require_eof`] to reject them.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] for the first fault found in `input`.
///
/// # Examples
///
/// ```
/// use rawjson::{Value, decode};
///
/// assert_eq!(decode(b"-5").unwrap(), Value::Number(-5.0));
///
/// let err = decode(b"[1,2,]").unwrap_err();
/// assert_eq!(err.to_string(), "line 1: error at ']': extra ','");
/// ```
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    decode_with(input, DecodeOptions::default())
}

/// Decodes a complete document with explicit options.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] for the first fault found in `input`.
pub fn decode_with(input: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    Decoder::new(input, options).decode()
}

/// Single-use decoder state: a scanner over one input plus the current
/// nesting depth.
#[derive(Debug)]
pub struct Decoder<'src> {
    scanner: Scanner<'src>,
    options: DecodeOptions,
    depth: usize,
}

impl<'src> Decoder<'src> {
    /// Creates a decoder over `input`.
    #[must_use]
    pub fn new(input: &'src [u8], options: DecodeOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    /// Decodes the first value of the input, consuming the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Syntax`] for the first fault found.
    pub fn decode(mut self) -> Result<Value, DecodeError> {
        let token = self.scan()?;
        let value = self.parse_value(token)?;

        if self.options.require_eof {
            let token = self.scan()?;
            if !token.is_eof() {
                return Err(self.error_at(&token, SyntaxError::TrailingCharacters));
            }
        }

        Ok(value)
    }

    /// Next token, with lexical errors surfaced immediately.
    fn scan(&mut self) -> Result<Token<'src>, DecodeError> {
        let token = self.scanner.next_token();
        match token.kind {
            TokenKind::Error(err) => Err(self.error_at(&token, err.into())),
            _ => Ok(token),
        }
    }

    fn error_at(&self, token: &Token<'_>, message: SyntaxError) -> DecodeError {
        tracing::debug!(line = token.line, depth = self.depth, %message, "decode failed");
        DecodeError::at(token, message)
    }

    fn parse_value(&mut self, token: Token<'src>) -> Result<Value, DecodeError> {
        match token.kind {
            TokenKind::LBrace => self.parse_object(&token),
            TokenKind::LBracket => self.parse_array(&token),
            TokenKind::Minus | TokenKind::Number => self.parse_number(&token),
            TokenKind::String => Ok(Value::String(unquote(&token))),
            TokenKind::True => Ok(Value::Boolean(true)),
            TokenKind::False => Ok(Value::Boolean(false)),
            TokenKind::Null => Ok(Value::Null),
            _ => Err(self.error_at(&token, SyntaxError::UnknownSymbol)),
        }
    }

    /// A leading `-` is its own token: fetch exactly one more token for the
    /// magnitude and negate it.
    fn parse_number(&mut self, token: &Token<'src>) -> Result<Value, DecodeError> {
        if token.kind == TokenKind::Minus {
            let magnitude = self.scan()?;
            if magnitude.kind != TokenKind::Number {
                return Err(self.error_at(&magnitude, SyntaxError::ExpectedNumber));
            }
            return Ok(Value::Number(-self.number_text(&magnitude)?));
        }
        Ok(Value::Number(self.number_text(token)?))
    }

    fn number_text(&self, token: &Token<'src>) -> Result<f64, DecodeError> {
        core::str::from_utf8(token.text)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| self.error_at(token, SyntaxError::UnknownSymbol))
    }

    fn enter(&mut self, open: &Token<'src>) -> Result<(), DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error_at(open, SyntaxError::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self, open: &Token<'src>) -> Result<Value, DecodeError> {
        self.enter(open)?;
        let mut map = Map::default();

        let mut token = self.scan()?;
        while token.kind != TokenKind::RBrace {
            if token.kind != TokenKind::String {
                return Err(self.error_at(&token, SyntaxError::ExpectedStringKey));
            }
            let key = unquote(&token);

            token = self.scan()?;
            if token.kind != TokenKind::Colon {
                return Err(self.error_at(&token, SyntaxError::MissingColon));
            }

            token = self.scan()?;
            let value = self.parse_value(token)?;
            // last write wins, first position is kept
            map.insert(key, value);

            token = self.after_member(TokenKind::RBrace)?;
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self, open: &Token<'src>) -> Result<Value, DecodeError> {
        self.enter(open)?;
        let mut array = Array::new();

        let mut token = self.scan()?;
        while token.kind != TokenKind::RBracket {
            array.push(self.parse_value(token)?);
            token = self.after_member(TokenKind::RBracket)?;
        }

        self.depth -= 1;
        Ok(Value::Array(array))
    }

    /// Reads what follows an element: either `close`, which is returned, or a
    /// comma, in which case the token after it is returned. A comma directly
    /// before `close` is rejected.
    fn after_member(&mut self, close: TokenKind) -> Result<Token<'src>, DecodeError> {
        let token = self.scan()?;
        if token.kind == close {
            return Ok(token);
        }
        if token.kind != TokenKind::Comma {
            return Err(self.error_at(&token, SyntaxError::MissingComma));
        }

        let next = self.scan()?;
        if next.kind == close {
            return Err(self.error_at(&next, SyntaxError::ExtraComma));
        }
        Ok(next)
    }
}

/// Interior bytes of a string token, copied verbatim.
fn unquote(token: &Token<'_>) -> BString {
    let bytes: &[u8] = token.text;
    let inner = bytes
        .strip_prefix(b"\"")
        .and_then(|rest| rest.strip_suffix(b"\""))
        .unwrap_or_default();
    BString::from(inner.to_vec())
}
