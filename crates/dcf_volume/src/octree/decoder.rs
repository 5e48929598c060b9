//! Recursive descent decoder for the DCF node stream.
//!
//! ```text
//!   decode(bytes, config)
//!     │
//!     ├─ DcfHeader::read        skip sign block, read X/Y/Z
//!     ├─ DenseGrid::allocate    zero-filled (X+1)(Y+1)(Z+1) points
//!     └─ decode_node(root)      depth-first, mutates the grid
//!          │
//!          ├─ Internal ──► decode_node × 8 (level - 1)
//!          ├─ Uniform  ──► DenseGrid::propagate_uniform
//!          └─ Leaf     ──► 8 corner writes, 12 edges read and discarded
//! ```
//!
//! The cursor and grid are threaded through the recursion by `&mut`. Node
//! geometry is derived from the parent on each call, never read from the
//! stream.

use glam::Vec3;
use tracing::{debug, trace, warn};

use super::node::{NodeTag, OctreeNode};
use super::stats::DecodeStats;
use crate::config::DecodeConfig;
use crate::constants::{classify, CORNER_OFFSETS, EDGE_CORNERS};
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::grid::DenseGrid;
use crate::header::DcfHeader;

/// Result of a full decode.
#[derive(Clone, Debug)]
pub struct DecodedVolume {
  pub header: DcfHeader,
  pub grid: DenseGrid,
  pub stats: DecodeStats,
}

/// Surface crossing stored on a leaf edge.
///
/// The decoder reads these to keep the stream aligned and drops them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIntersection {
  /// Crossing position along the edge, 0..1.
  pub offset: f32,
  /// Surface normal at the crossing.
  pub normal: Vec3,
}

impl EdgeIntersection {
  /// Read one record (4 floats).
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
    let offset = cursor.read_f32()?;
    let normal = Vec3::new(cursor.read_f32()?, cursor.read_f32()?, cursor.read_f32()?);
    Ok(Self { offset, normal })
  }
}

/// Decode a complete DCF buffer into a dense point grid.
///
/// The root node sits at level `config.depth` with origin (0,0,0). Any
/// failure aborts the decode; no partial grid is returned.
#[cfg_attr(feature = "instrument", tracing::instrument(skip_all, name = "dcf::decode"))]
pub fn decode(bytes: &[u8], config: &DecodeConfig) -> Result<DecodedVolume> {
  config.validate()?;

  let mut cursor = ByteCursor::new(bytes);
  let header = DcfHeader::read(&mut cursor, config.sign_block_len)?;
  debug!(dims = %header.dims, depth = config.depth, "read dcf header");

  let root_side = config.root_side().unwrap_or(u32::MAX);
  if header.dims.max_element() > root_side {
    warn!(
      dims = %header.dims,
      root_side,
      "grid is larger than the root cube; uncovered points stay outside"
    );
  }

  let mut grid = DenseGrid::allocate(header.dims.x, header.dims.y, header.dims.z)?;
  let mut stats = DecodeStats::default();

  {
    #[cfg(feature = "instrument")]
    let _span = tracing::info_span!("decode_nodes").entered();
    decode_node(&mut cursor, &mut grid, OctreeNode::root(config.depth), &mut stats)?;
  }

  stats.bytes_consumed = cursor.position();
  stats.trailing_bytes = cursor.remaining();
  if !stats.fully_consumed() {
    warn!(trailing = stats.trailing_bytes, "bytes left after root node");
  }
  debug!(
    internal = stats.internal_nodes,
    uniform = stats.uniform_nodes,
    leaf = stats.leaf_nodes,
    intersections = stats.intersections_skipped,
    bytes = stats.bytes_consumed,
    "decoded octree"
  );

  Ok(DecodedVolume {
    header,
    grid,
    stats,
  })
}

/// Decode one node and its subtree at `node`, writing into `grid`.
pub fn decode_node(
  cursor: &mut ByteCursor<'_>,
  grid: &mut DenseGrid,
  node: OctreeNode,
  stats: &mut DecodeStats,
) -> Result<()> {
  let offset = cursor.position();
  let tag = NodeTag::try_from(cursor.read_i32()?)
    .map_err(|tag| DecodeError::malformed(offset, format!("unknown node tag {}", tag)))?;

  match tag {
    NodeTag::Internal => {
      let children = node.children().ok_or_else(|| {
        DecodeError::malformed(offset, "internal node below level 0")
      })?;
      stats.internal_nodes += 1;
      for child in children {
        decode_node(cursor, grid, child, stats)?;
      }
    }
    NodeTag::Uniform => {
      let sign = cursor.read_i16()?;
      stats.uniform_nodes += 1;
      grid.propagate_uniform(node.origin, node.level, classify(sign))?;
    }
    NodeTag::Leaf => {
      stats.leaf_nodes += 1;
      decode_leaf(cursor, grid, node, stats)?;
    }
  }

  Ok(())
}

/// Corner signs, then the per-edge intersection lists.
fn decode_leaf(
  cursor: &mut ByteCursor<'_>,
  grid: &mut DenseGrid,
  node: OctreeNode,
  stats: &mut DecodeStats,
) -> Result<()> {
  if node.level != 0 {
    trace!(origin = %node.origin, level = node.level, "leaf above level 0 written as one cell");
  }

  for corner in CORNER_OFFSETS {
    let sign = cursor.read_i16()?;
    grid.set(node.origin + corner, classify(sign))?;
  }

  for edge in 0..EDGE_CORNERS.len() {
    let offset = cursor.position();
    let count = cursor.read_i32()?;
    let count = usize::try_from(count).map_err(|_| {
      DecodeError::malformed(
        offset,
        format!("negative intersection count {} on edge {}", count, edge),
      )
    })?;
    for _ in 0..count {
      EdgeIntersection::read(cursor)?;
    }
    stats.intersections_skipped += count;
  }

  Ok(())
}

#[cfg(test)]
#[path = "decoder_test.rs"]
mod decoder_test;
