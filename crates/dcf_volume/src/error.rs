//! Error type for DCF decoding.

use glam::UVec3;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Fatal decode failures.
///
/// Every variant aborts the decode. The cursor position is meaningless past
/// the first failure, so no partial grid is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  /// A typed read needed more bytes than remain in the buffer.
  #[error("truncated input at byte {offset}: needed {needed} bytes, {remaining} remaining")]
  TruncatedInput {
    offset: usize,
    needed: usize,
    remaining: usize,
  },

  /// The node stream is corrupt or misaligned.
  #[error("malformed octree at byte {offset}: {reason}")]
  MalformedOctree { offset: usize, reason: String },

  /// A grid write landed outside the allocated point grid.
  #[error("grid coordinate {coord} out of range for point grid of size {dims}")]
  IndexOutOfRange { coord: UVec3, dims: UVec3 },

  /// The requested grid has more points than [`MAX_POINTS`].
  ///
  /// [`MAX_POINTS`]: crate::constants::MAX_POINTS
  #[error("grid of {cells} cells exceeds the {limit} point limit")]
  GridTooLarge { cells: UVec3, limit: usize },

  /// The file header declares impossible grid dimensions.
  #[error("invalid header: {0}")]
  InvalidHeader(String),

  /// Decode parameters rejected before reading any bytes.
  #[error("invalid decode config: {0}")]
  InvalidConfig(String),
}

impl DecodeError {
  pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
    DecodeError::MalformedOctree {
      offset,
      reason: reason.into(),
    }
  }
}
