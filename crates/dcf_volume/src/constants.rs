//! Layout constants for the Polymender DCF octree stream.
//!
//! # File Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          DCF FILE LAYOUT                             │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  Offset   Size   Content                                             │
//! │  0        10     sign block ("multisign"), skipped                   │
//! │  10       4      X length (i32, cells)                               │
//! │  14       4      Y length (i32, cells)                               │
//! │  18       4      Z length (i32, cells)                               │
//! │  22       ..     root node, recursively encoded                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Node Encoding
//!
//! ```text
//! node := tag:i32 body
//!   tag 0 (internal)  body := node × 8            (children in CHILD_OFFSETS order)
//!   tag 1 (uniform)   body := sign:i16
//!   tag 2 (leaf)      body := sign:i16 × 8        (corners in CORNER_OFFSETS order)
//!                             edge × 12
//!   edge := count:i32 (offset:f32 nx:f32 ny:f32 nz:f32) × count
//! ```
//!
//! All multi-byte values are little-endian.
//!
//! # Cube Topology
//!
//! Corner and child index `i` has bits `XYZ` (X is the high bit):
//!
//! ```text
//!       3──────7         Corners (binary XYZ):
//!      /│     /│           0=(0,0,0)  1=(0,0,1)  2=(0,1,0)  3=(0,1,1)
//!     1─┼────5 │           4=(1,0,0)  5=(1,0,1)  6=(1,1,0)  7=(1,1,1)
//!     │ 2────┼─6
//!     │/     │/          +Y
//!     0──────4            │  +Z
//!                         │ /
//!                         └───+X
//! ```

use glam::UVec3;

/// Length of the leading sign block that precedes the grid dimensions.
pub const SIGN_BLOCK_LEN: usize = 10;

/// Deepest root level accepted by the decoder.
///
/// Node side lengths are `2^level` grid units held in `u32` coordinates.
pub const MAX_DEPTH: u32 = 30;

/// Largest point grid the decoder will allocate (one byte per point).
pub const MAX_POINTS: usize = 1 << 30;

/// Number of edges carried by every leaf node.
pub const EDGE_COUNT: usize = 12;

/// Output value for a point inside the surface.
pub const INSIDE: u8 = 1;

/// Output value for a point outside the surface.
pub const OUTSIDE: u8 = 0;

/// Unit offsets of the 8 octants, in stream order.
///
/// Used both for child placement (scaled by the child side length) and for
/// the 8 corner points of a unit cell.
pub const CHILD_OFFSETS: [UVec3; 8] = [
  UVec3::new(0, 0, 0),
  UVec3::new(0, 0, 1),
  UVec3::new(0, 1, 0),
  UVec3::new(0, 1, 1),
  UVec3::new(1, 0, 0),
  UVec3::new(1, 0, 1),
  UVec3::new(1, 1, 0),
  UVec3::new(1, 1, 1),
];

/// Corner offsets of a unit cell. Same ordering as [`CHILD_OFFSETS`].
pub const CORNER_OFFSETS: [UVec3; 8] = CHILD_OFFSETS;

/// Edge endpoint corner indices, in stream order.
///
/// Four X-parallel edges, then four Y-parallel, then four Z-parallel.
pub const EDGE_CORNERS: [[usize; 2]; EDGE_COUNT] = [
  [0, 4],
  [1, 5],
  [2, 6],
  [3, 7],
  [0, 2],
  [1, 3],
  [4, 6],
  [5, 7],
  [0, 1],
  [2, 3],
  [4, 5],
  [6, 7],
];

/// Map a source sign to the output classification.
///
/// The source stores `0` for inside; the output stores `1` for inside.
#[inline(always)]
pub const fn classify(sign: i16) -> u8 {
  if sign == 0 {
    INSIDE
  } else {
    OUTSIDE
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
