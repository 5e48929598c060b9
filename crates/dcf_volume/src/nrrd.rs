//! Text NRRD serialization for decoded grids.
//!
//! ```text
//! NRRD0001
//! dimension: 3
//! type: int
//! sizes: <Z+1> <Y+1> <X+1>
//! spacings: 1 1 1
//! encoding: text
//!
//! v v v v ...            X outer, Y middle, Z inner
//! ```
//!
//! NRRD lists the fastest axis first, so the Z-minor memory layout of
//! [`DenseGrid`] is declared with Z leading.

use std::io::{self, Write};

use crate::grid::DenseGrid;

/// Write `grid` as a text-encoded NRRD volume.
pub fn write_nrrd<W: Write>(grid: &DenseGrid, writer: &mut W) -> io::Result<()> {
  let size = grid.size();
  writeln!(writer, "NRRD0001")?;
  writeln!(writer, "dimension: 3")?;
  writeln!(writer, "type: int")?;
  writeln!(writer, "sizes: {} {} {}", size.z, size.y, size.x)?;
  writeln!(writer, "spacings: 1 1 1")?;
  writeln!(writer, "encoding: text")?;
  writeln!(writer)?;
  write_values(grid, writer)
}

/// Write the bare value stream: every point in X-outer / Z-inner order,
/// space separated, with a trailing newline.
pub fn write_values<W: Write>(grid: &DenseGrid, writer: &mut W) -> io::Result<()> {
  let mut values = grid.as_slice().iter();
  if let Some(first) = values.next() {
    write!(writer, "{}", first)?;
    for value in values {
      write!(writer, " {}", value)?;
    }
  }
  writeln!(writer)
}

#[cfg(test)]
#[path = "nrrd_test.rs"]
mod nrrd_test;
