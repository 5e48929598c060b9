//! Counters collected during a decode pass.

/// Statistics from one decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
  /// Internal nodes visited.
  pub internal_nodes: usize,
  /// Uniform nodes visited.
  pub uniform_nodes: usize,
  /// Leaf nodes visited.
  pub leaf_nodes: usize,
  /// Edge intersection records read and discarded.
  pub intersections_skipped: usize,
  /// Bytes consumed from the start of the buffer, header included.
  pub bytes_consumed: usize,
  /// Bytes left after the root node.
  pub trailing_bytes: usize,
}

impl DecodeStats {
  /// Total nodes visited.
  #[inline]
  pub fn total_nodes(&self) -> usize {
    self.internal_nodes + self.uniform_nodes + self.leaf_nodes
  }

  /// Check if the stream ended exactly at the end of the root node.
  #[inline]
  pub fn fully_consumed(&self) -> bool {
    self.trailing_bytes == 0
  }
}
