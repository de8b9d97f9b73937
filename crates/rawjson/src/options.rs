/// Configuration for [`decode_with`](crate::decode_with).
///
/// # Examples
///
/// ```rust
/// use rawjson::{DecodeOptions, decode_with};
///
/// let options = DecodeOptions {
///     require_eof: true,
///     ..Default::default()
/// };
/// assert!(decode_with(b"[1] [2]", options).is_err());
/// assert!(decode_with(b"[1]\n", options).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether the whole input must be consumed by the first value.
    ///
    /// When `false`, decoding stops after the first complete value and any
    /// bytes that follow are ignored, so `[1] garbage` decodes as `[1]`. When
    /// `true`, anything but whitespace after the first value is a syntax
    /// error.
    ///
    /// # Default
    ///
    /// `false`
    pub require_eof: bool,

    /// Maximum nesting of arrays and objects.
    ///
    /// The decoder is recursive; this bounds its stack use. A document
    /// nesting deeper than this fails with
    /// [`SyntaxError::NestingTooDeep`](crate::SyntaxError::NestingTooDeep).
    ///
    /// # Default
    ///
    /// `256`
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            require_eof: false,
            max_depth: 256,
        }
    }
}

/// Configuration for [`encode_with`](crate::encode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Capacity of the output buffer before the first doubling.
    ///
    /// A capacity of zero is treated as one.
    ///
    /// # Default
    ///
    /// `512`
    pub initial_capacity: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 512,
        }
    }
}
