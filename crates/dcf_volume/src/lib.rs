//! dcf_volume - Polymender DCF octree decoding into dense point grids
//!
//! A DCF file stores an inside/outside sign field as an implicit octree: a
//! stream of tagged nodes that are either subdivided, uniform, or leaves with
//! per-corner signs and edge intersection data. This crate walks that stream
//! and rasterizes it into a dense `(X+1) × (Y+1) × (Z+1)` point grid where
//! `1` = inside and `0` = outside.
//!
//! # Features
//!
//! - **Forward-only cursor**: typed little-endian reads that fail on
//!   truncation instead of reading garbage
//! - **Recursive decoder**: tagged dispatch over internal / uniform / leaf
//!   nodes with implicit node geometry
//! - **Dense grid**: point-space storage with uniform-region propagation
//! - **NRRD output**: text NRRD writer for the decoded grid
//!
//! # Example
//!
//! ```ignore
//! use dcf_volume::{decode, nrrd, DecodeConfig};
//!
//! let bytes = std::fs::read("bunny-dc-6-0.8.dcf")?;
//! let volume = decode(&bytes, &DecodeConfig::with_depth(6))?;
//!
//! let mut out = std::fs::File::create("bunny.nrrd")?;
//! nrrd::write_nrrd(&volume.grid, &mut out)?;
//! ```

pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod header;
pub mod nrrd;

// Re-export commonly used items
pub use config::DecodeConfig;
pub use constants::{classify, CHILD_OFFSETS, CORNER_OFFSETS, EDGE_CORNERS, INSIDE, OUTSIDE};
pub use cursor::ByteCursor;
pub use error::{DecodeError, Result};
pub use grid::DenseGrid;
pub use header::DcfHeader;

// Octree node stream decoding
pub mod octree;
pub use octree::{decode, DecodeStats, DecodedVolume, NodeTag, OctreeNode};

// Test utilities
#[cfg(test)]
pub mod test_utils;
