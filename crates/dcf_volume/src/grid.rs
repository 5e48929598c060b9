//! DenseGrid - point-sampled inside/outside classification volume.
//!
//! The grid lives in point space: an octree of `X × Y × Z` cells has
//! `(X+1) × (Y+1) × (Z+1)` corner points.
//!
//! # Memory Layout
//!
//! ```text
//! Row-major, Z innermost:
//!
//! index = (x * size.y + y) * size.z + z
//!
//! Content: [0,0,0][0,0,1]...[0,0,Z][0,1,0]...[0,Y,Z][1,0,0]...
//! ```
//!
//! This is also the order the NRRD writer emits values in.

use glam::UVec3;

use crate::constants::{CORNER_OFFSETS, MAX_POINTS};
use crate::error::{DecodeError, Result};
use crate::octree::OctreeNode;

/// Dense 3D array of point classifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
  /// Points per axis (cell count + 1).
  size: UVec3,
  data: Vec<u8>,
}

impl DenseGrid {
  /// Allocate a zero-filled point grid for `x_len × y_len × z_len` cells.
  ///
  /// Fails with `GridTooLarge` past [`MAX_POINTS`] points.
  pub fn allocate(x_len: u32, y_len: u32, z_len: u32) -> Result<Self> {
    let cells = UVec3::new(x_len, y_len, z_len);
    let len = Self::point_count(cells).ok_or(DecodeError::GridTooLarge {
      cells,
      limit: MAX_POINTS,
    })?;
    Ok(Self {
      size: cells + UVec3::ONE,
      data: vec![0; len],
    })
  }

  /// Number of points for a grid of `cells`, or `None` when it exceeds
  /// [`MAX_POINTS`].
  pub fn point_count(cells: UVec3) -> Option<usize> {
    cells
      .to_array()
      .into_iter()
      .try_fold(1usize, |acc, c| {
        let points = usize::try_from(c).ok()?.checked_add(1)?;
        acc.checked_mul(points)
      })
      .filter(|&len| len <= MAX_POINTS)
  }

  /// Points per axis.
  #[inline]
  pub fn size(&self) -> UVec3 {
    self.size
  }

  /// Cells per axis, as declared by the source header.
  #[inline]
  pub fn cell_dims(&self) -> UVec3 {
    self.size - UVec3::ONE
  }

  /// Total number of points.
  #[inline]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Check if the grid holds no points.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Raw values in X-major / Z-minor order.
  #[inline]
  pub fn as_slice(&self) -> &[u8] {
    &self.data
  }

  /// Linear index of a point, or `None` when outside the grid.
  #[inline]
  pub fn index_of(&self, coord: UVec3) -> Option<usize> {
    if coord.cmplt(self.size).all() {
      let (sy, sz) = (self.size.y as usize, self.size.z as usize);
      Some((coord.x as usize * sy + coord.y as usize) * sz + coord.z as usize)
    } else {
      None
    }
  }

  /// Point coordinate for a linear index.
  #[inline]
  pub fn coord_of(&self, index: usize) -> UVec3 {
    let (sy, sz) = (self.size.y as usize, self.size.z as usize);
    UVec3::new(
      (index / (sy * sz)) as u32,
      ((index / sz) % sy) as u32,
      (index % sz) as u32,
    )
  }

  /// Value at a point, or `None` when outside the grid.
  #[inline]
  pub fn get(&self, coord: UVec3) -> Option<u8> {
    self.index_of(coord).map(|i| self.data[i])
  }

  /// Write a value at a point.
  #[inline]
  pub fn set(&mut self, coord: UVec3, value: u8) -> Result<()> {
    match self.index_of(coord) {
      Some(i) => {
        self.data[i] = value;
        Ok(())
      }
      None => Err(DecodeError::IndexOutOfRange {
        coord,
        dims: self.size,
      }),
    }
  }

  /// Set every point to `value`.
  pub fn fill(&mut self, value: u8) {
    self.data.fill(value);
  }

  /// Number of points holding `value`.
  pub fn count(&self, value: u8) -> usize {
    self.data.iter().filter(|&&v| v == value).count()
  }

  /// Write the 8 corner points of the unit cell at `origin`.
  pub fn set_cell_corners(&mut self, origin: UVec3, value: u8) -> Result<()> {
    for offset in CORNER_OFFSETS {
      self.set(origin + offset, value)?;
    }
    Ok(())
  }

  /// Assign `value` to every point covered by the cube of side `2^level` at
  /// `origin`.
  ///
  /// Descends through all 8 octants down to level 0 and writes the corners
  /// of each unit cell, so shared faces between octants are written more
  /// than once with the same value.
  ///
  /// The far corner is checked first; a cube that overhangs the grid (or
  /// cannot be addressed in `u32`) fails without writing anything.
  pub fn propagate_uniform(&mut self, origin: UVec3, level: u32, value: u8) -> Result<()> {
    match OctreeNode::new(origin, level).far_corner() {
      Some(far) if self.index_of(far).is_some() => self.propagate_octants(origin, level, value),
      far => Err(DecodeError::IndexOutOfRange {
        coord: far.unwrap_or(UVec3::MAX),
        dims: self.size,
      }),
    }
  }

  fn propagate_octants(&mut self, origin: UVec3, level: u32, value: u8) -> Result<()> {
    if level == 0 {
      return self.set_cell_corners(origin, value);
    }
    let half = 1u32 << (level - 1);
    for offset in CORNER_OFFSETS {
      self.propagate_octants(origin + offset * half, level - 1, value)?;
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
