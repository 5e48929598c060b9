//! DecodeConfig - parameters for a single decode pass.

use crate::constants::{MAX_DEPTH, SIGN_BLOCK_LEN};
use crate::error::{DecodeError, Result};

/// Parameters for decoding one DCF buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
  /// Level of the root node. The root cube has side `2^depth` cells.
  ///
  /// Not stored in the file; the converter that wrote it was run with the
  /// same value.
  pub depth: u32,

  /// Bytes skipped before the grid dimensions.
  pub sign_block_len: usize,
}

impl DecodeConfig {
  /// Config for a root at `depth` with the standard sign block.
  pub fn with_depth(depth: u32) -> Self {
    Self {
      depth,
      ..Self::default()
    }
  }

  /// Reject configs the decoder cannot run.
  pub fn validate(&self) -> Result<()> {
    if self.depth > MAX_DEPTH {
      return Err(DecodeError::InvalidConfig(format!(
        "depth {} exceeds maximum {}",
        self.depth, MAX_DEPTH
      )));
    }
    Ok(())
  }

  /// Side length of the root cube in cells, or `None` past `u32`.
  #[inline]
  pub fn root_side(&self) -> Option<u32> {
    1u32.checked_shl(self.depth)
  }
}

impl Default for DecodeConfig {
  fn default() -> Self {
    Self {
      depth: 0,
      sign_block_len: SIGN_BLOCK_LEN,
    }
  }
}
