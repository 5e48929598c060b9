//! ByteCursor - forward-only typed reader over a borrowed byte buffer.

use crate::error::{DecodeError, Result};

/// Forward-only reader over an immutable byte buffer.
///
/// Reads are little-endian and advance the position by the consumed width.
/// A failed read leaves the position untouched. There is no way to rewind.
#[derive(Debug)]
pub struct ByteCursor<'a> {
  bytes: &'a [u8],
  position: usize,
}

impl<'a> ByteCursor<'a> {
  /// Create a cursor at the start of `bytes`.
  pub fn new(bytes: &'a [u8]) -> Self {
    Self { bytes, position: 0 }
  }

  /// Current byte offset from the start of the buffer.
  #[inline]
  pub fn position(&self) -> usize {
    self.position
  }

  /// Bytes not yet consumed.
  #[inline]
  pub fn remaining(&self) -> usize {
    self.bytes.len() - self.position
  }

  /// Total buffer length.
  #[inline]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  /// Check if the buffer is empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Check if every byte has been consumed.
  #[inline]
  pub fn is_exhausted(&self) -> bool {
    self.remaining() == 0
  }

  /// Consume `n` bytes and return them.
  fn take(&mut self, n: usize) -> Result<&'a [u8]> {
    let remaining = self.remaining();
    if n > remaining {
      return Err(DecodeError::TruncatedInput {
        offset: self.position,
        needed: n,
        remaining,
      });
    }
    let start = self.position;
    self.position += n;
    Ok(&self.bytes[start..start + n])
  }

  fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(self.take(N)?);
    Ok(out)
  }

  /// Advance past `n` bytes without interpreting them.
  pub fn skip(&mut self, n: usize) -> Result<()> {
    self.take(n).map(|_| ())
  }

  /// Read a 32-bit signed integer.
  #[inline]
  pub fn read_i32(&mut self) -> Result<i32> {
    self.take_array().map(i32::from_le_bytes)
  }

  /// Read a 16-bit signed integer.
  #[inline]
  pub fn read_i16(&mut self) -> Result<i16> {
    self.take_array().map(i16::from_le_bytes)
  }

  /// Read a 32-bit float.
  #[inline]
  pub fn read_f32(&mut self) -> Result<f32> {
    self.take_array().map(f32::from_le_bytes)
  }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
