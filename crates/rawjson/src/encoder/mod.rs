//! Encoder: writes a [`Value`] tree into an [`EncodeBuffer`].
//!
//! Output is compact: no whitespace, object members in map order. Strings are
//! written verbatim between quotes with no escaping, so a string containing
//! `"` does not survive a round trip. Numbers must be integral.

mod buffer;

use alloc::vec::Vec;
use core::fmt::Write as _;

pub use buffer::EncodeBuffer;

use crate::{error::EncodeError, options::EncodeOptions, value::Value};

/// Encodes a composite value with [`EncodeOptions::default`].
///
/// # Errors
///
/// - [`EncodeError::UnsupportedTopLevel`] if `value` is not an array or
///   object.
/// - [`EncodeError::UnsupportedNumber`] for the first number that is not an
///   integer in the `i64` range.
///
/// # Examples
///
/// ```
/// use rawjson::{EncodeError, Value, encode};
///
/// let value: Value = [Value::from(1), Value::Null, Value::from("a")].into_iter().collect();
/// assert_eq!(encode(&value).unwrap(), br#"[1,null,"a"]"#);
///
/// assert!(matches!(
///     encode(&Value::from(5)),
///     Err(EncodeError::UnsupportedTopLevel { kind: "number" })
/// ));
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode_with(value, EncodeOptions::default())
}

/// Encodes a composite value with explicit options.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_with(value: &Value, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    if !value.is_composite() {
        tracing::debug!(kind = value.kind(), "encode rejected top-level value");
        return Err(EncodeError::UnsupportedTopLevel { kind: value.kind() });
    }

    let mut buf = EncodeBuffer::with_capacity(options.initial_capacity);
    write_value(&mut buf, value)?;
    Ok(buf.into_bytes())
}

fn write_value(buf: &mut EncodeBuffer, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Null => buf.push_bytes(b"null"),
        Value::Boolean(true) => buf.push_bytes(b"true"),
        Value::Boolean(false) => buf.push_bytes(b"false"),
        Value::Number(n) => write_number(buf, *n)?,
        Value::String(s) => write_string(buf, s),
        Value::Array(items) => {
            buf.push_byte(b'[');
            for item in items {
                write_value(buf, item)?;
                buf.push_byte(b',');
            }
            close(buf, !items.is_empty(), b']');
        }
        Value::Object(map) => {
            buf.push_byte(b'{');
            for (key, item) in map {
                write_string(buf, key);
                buf.push_byte(b':');
                write_value(buf, item)?;
                buf.push_byte(b',');
            }
            close(buf, !map.is_empty(), b'}');
        }
    }
    Ok(())
}

/// Replaces the trailing separator, if one was written, with `end`.
fn close(buf: &mut EncodeBuffer, has_separator: bool, end: u8) {
    if has_separator {
        buf.truncate_last();
    }
    buf.push_byte(end);
}

fn write_string(buf: &mut EncodeBuffer, s: &[u8]) {
    buf.ensure(s.len() + 2);
    buf.push_byte(b'"');
    buf.push_bytes(s);
    buf.push_byte(b'"');
}

fn write_number(buf: &mut EncodeBuffer, n: f64) -> Result<(), EncodeError> {
    let Some(i) = as_integer(n) else {
        tracing::debug!(number = n, "encode rejected non-integral number");
        return Err(EncodeError::UnsupportedNumber(n));
    };
    // EncodeBuffer's fmt::Write never fails
    let _ = write!(buf, "{i}");
    Ok(())
}

/// The exact `i64` value of `n`, if it has one. `-0.0` maps to `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
pub(crate) fn as_integer(n: f64) -> Option<i64> {
    // 2^63, the first magnitude outside i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !(-LIMIT..LIMIT).contains(&n) {
        return None;
    }
    let i = n as i64;
    (i as f64 == n).then_some(i)
}
