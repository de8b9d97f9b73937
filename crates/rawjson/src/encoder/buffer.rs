use alloc::vec::Vec;
use core::fmt;

/// Growable output buffer with an explicit doubling policy.
///
/// Every write goes through [`ensure`](Self::ensure) first, so the logical
/// capacity always covers the bytes written. Capacity doubles until the
/// pending write fits and never shrinks.
#[derive(Debug, Clone)]
pub struct EncodeBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl EncodeBuffer {
    /// Creates an empty buffer. A zero capacity is treated as one so that
    /// doubling always makes progress.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Current logical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Makes room for `additional` more bytes, doubling as often as needed.
    pub fn ensure(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        if needed <= self.capacity {
            return;
        }
        let mut capacity = self.capacity;
        while capacity < needed {
            capacity *= 2;
        }
        tracing::trace!(from = self.capacity, to = capacity, "encode buffer grown");
        self.bytes.reserve_exact(capacity - self.bytes.len());
        self.capacity = capacity;
    }

    /// Appends one byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.ensure(1);
        self.bytes.push(byte);
    }

    /// Appends a byte slice.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.ensure(bytes.len());
        self.bytes.extend_from_slice(bytes);
    }

    /// Drops the last byte written, if any. Used to take back a trailing
    /// separator.
    pub fn truncate_last(&mut self) {
        self.bytes.pop();
    }

    /// Hands the written bytes to the caller.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Write for EncodeBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}
