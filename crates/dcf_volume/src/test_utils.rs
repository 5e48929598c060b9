//! Test utilities for decoder tests.
//!
//! Provides a byte-stream builder for synthetic DCF files and a random
//! well-formed octree generator with a reference rasterization.

use glam::UVec3;
use rand::Rng;

use crate::constants::{classify, CORNER_OFFSETS, EDGE_COUNT};
use crate::grid::DenseGrid;
use crate::octree::NodeTag;

// =============================================================================
// Stream Builder
// =============================================================================

/// Writes DCF byte streams token by token.
#[derive(Default)]
pub struct DcfBuilder {
  bytes: Vec<u8>,
}

impl DcfBuilder {
  /// Start a file with the standard sign block and the given cell counts.
  pub fn new(dims: [i32; 3]) -> Self {
    let mut builder = Self::headerless();
    builder.bytes.extend_from_slice(b"multisign\0");
    for d in dims {
      builder.i32(d);
    }
    builder
  }

  /// Start a bare node stream with no header.
  pub fn headerless() -> Self {
    Self::default()
  }

  pub fn i32(&mut self, value: i32) -> &mut Self {
    self.bytes.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn i16(&mut self, value: i16) -> &mut Self {
    self.bytes.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn f32(&mut self, value: f32) -> &mut Self {
    self.bytes.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn tag(&mut self, tag: NodeTag) -> &mut Self {
    self.i32(tag as i32)
  }

  pub fn internal(&mut self) -> &mut Self {
    self.tag(NodeTag::Internal)
  }

  pub fn uniform(&mut self, sign: i16) -> &mut Self {
    self.tag(NodeTag::Uniform).i16(sign)
  }

  /// Leaf with the given corner signs and no edge intersections.
  pub fn leaf(&mut self, signs: [i16; 8]) -> &mut Self {
    self.leaf_with_edges(signs, [0; EDGE_COUNT])
  }

  /// Leaf with `counts[e]` intersection records on edge `e`.
  pub fn leaf_with_edges(&mut self, signs: [i16; 8], counts: [i32; EDGE_COUNT]) -> &mut Self {
    self.tag(NodeTag::Leaf);
    for sign in signs {
      self.i16(sign);
    }
    for count in counts {
      self.i32(count);
      for i in 0..count.max(0) {
        self.f32(0.5).f32(i as f32).f32(0.0).f32(1.0);
      }
    }
    self
  }

  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  pub fn build(&self) -> Vec<u8> {
    self.bytes.clone()
  }
}

// =============================================================================
// Random Octrees
// =============================================================================

/// Emit a random well-formed subtree at `origin`/`level` and apply the same
/// writes to `reference` by direct box filling.
pub fn random_subtree(
  rng: &mut impl Rng,
  builder: &mut DcfBuilder,
  reference: &mut DenseGrid,
  origin: UVec3,
  level: u32,
) {
  let choice = rng.random_range(0..3);
  if level > 0 && choice == 0 {
    builder.internal();
    let half = 1u32 << (level - 1);
    for offset in CORNER_OFFSETS {
      random_subtree(rng, builder, reference, origin + offset * half, level - 1);
    }
  } else if level > 0 || choice == 1 {
    let sign: i16 = rng.random_range(0..2);
    builder.uniform(sign);
    fill_box(reference, origin, 1 << level, classify(sign));
  } else {
    let signs: [i16; 8] = std::array::from_fn(|_| rng.random_range(0..2));
    let counts: [i32; EDGE_COUNT] = std::array::from_fn(|_| rng.random_range(0..3));
    builder.leaf_with_edges(signs, counts);
    for (corner, sign) in CORNER_OFFSETS.iter().zip(signs) {
      reference.set(origin + *corner, classify(sign)).unwrap();
    }
  }
}

/// Write `value` to every point of the cube `origin..=origin + side`.
pub fn fill_box(grid: &mut DenseGrid, origin: UVec3, side: u32, value: u8) {
  for x in origin.x..=origin.x + side {
    for y in origin.y..=origin.y + side {
      for z in origin.z..=origin.z + side {
        grid.set(UVec3::new(x, y, z), value).unwrap();
      }
    }
  }
}
