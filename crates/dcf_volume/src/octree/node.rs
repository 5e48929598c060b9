//! OctreeNode - immutable value type for a node position in the DCF stream.
//!
//! Nodes are never stored. Each one is derived from its parent while the
//! decoder recurses, so memory use is O(depth).

use glam::UVec3;

use crate::constants::CHILD_OFFSETS;

/// Node type tag leading every node in the stream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(i32)]
pub enum NodeTag {
  /// Eight child nodes follow.
  Internal = 0,
  /// One sign covers the whole cube.
  Uniform = 1,
  /// Eight corner signs plus per-edge intersection records.
  Leaf = 2,
}

impl TryFrom<i32> for NodeTag {
  type Error = i32;

  fn try_from(tag: i32) -> Result<Self, Self::Error> {
    match tag {
      0 => Ok(NodeTag::Internal),
      1 => Ok(NodeTag::Uniform),
      2 => Ok(NodeTag::Leaf),
      other => Err(other),
    }
  }
}

/// Octree node position - immutable value type.
///
/// `origin` is the minimum corner in grid point coordinates. The node covers
/// the cube `origin..=origin + 2^level` on every axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OctreeNode {
  /// Minimum corner in grid point coordinates
  pub origin: UVec3,
  /// Subdivision level (0 = single cell)
  pub level: u32,
}

impl OctreeNode {
  /// Create a new node at the given origin and level.
  pub fn new(origin: UVec3, level: u32) -> Self {
    Self { origin, level }
  }

  /// Root node of a stream decoded at `depth`.
  pub fn root(depth: u32) -> Self {
    Self::new(UVec3::ZERO, depth)
  }

  /// Side length in cells (2^level), or `None` when it does not fit in `u32`.
  #[inline]
  pub fn side(&self) -> Option<u32> {
    1u32.checked_shl(self.level)
  }

  /// Maximum corner in grid point coordinates (inclusive).
  ///
  /// `None` when the corner cannot be addressed in `u32`.
  pub fn far_corner(&self) -> Option<UVec3> {
    let side = self.side()?;
    Some(UVec3::new(
      self.origin.x.checked_add(side)?,
      self.origin.y.checked_add(side)?,
      self.origin.z.checked_add(side)?,
    ))
  }

  /// All 8 children (finer detail: level - 1) in stream order.
  ///
  /// Child `i` sits at `origin + CHILD_OFFSETS[i] * 2^(level-1)`.
  ///
  /// Returns None if already at level 0 (cannot subdivide further) or if
  /// the node itself cannot be addressed in `u32`.
  pub fn children(&self) -> Option<[Self; 8]> {
    let level = self.level.checked_sub(1)?;
    self.far_corner()?;
    let half = 1u32 << level;
    Some(CHILD_OFFSETS.map(|offset| Self {
      origin: self.origin + offset * half,
      level,
    }))
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
