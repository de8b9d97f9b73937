//! A small, byte-oriented JSON codec.
//!
//! `rawjson` converts a byte slice in a restricted JSON grammar into a
//! [`Value`] tree, and a composite [`Value`] back into bytes.
//!
//! - [`decode`] drives a hand-rolled [`Scanner`] with single-token lookahead
//!   through a recursive-descent decoder. The first error aborts the call and
//!   is reported with its 1-based source line.
//! - [`encode`] walks a value tree into a doubling [`EncodeBuffer`] and hands
//!   the bytes to the caller.
//!
//! The grammar is deliberately small: strings are copied verbatim between
//! their quotes (no escape processing), numbers are `digits` or
//! `digits.digits` with an optional leading `-` token, and the encoder only
//! writes integral numbers.
//!
//! ```rust
//! use rawjson::{Value, decode, encode};
//!
//! let value = decode(br#"{"name": "modem", "ports": [80, -443]}"#).unwrap();
//! assert_eq!(value["ports"][1], Value::Number(-443.0));
//!
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, br#"{"name":"modem","ports":[80,-443]}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod options;
mod scanner;
mod value;

#[cfg(test)]
mod tests;

pub use decoder::{Decoder, decode, decode_with};
pub use encoder::{EncodeBuffer, encode, encode_with};
pub use error::{DecodeError, EncodeError, Near, SyntaxError};
pub use options::{DecodeOptions, EncodeOptions};
pub use scanner::{ScanError, Scanner, Token, TokenKind};
pub use value::{Array, Map, Value};
