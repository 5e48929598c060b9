//! Octree module for decoding the DCF node stream.
//!
//! The octree is implicit: no tree nodes are built. Each node's origin and
//! level come from its parent during the depth-first walk, and its contents
//! are rasterized straight into a [`DenseGrid`](crate::grid::DenseGrid).
//!
//! # Level Convention
//!
//! Level 0 = a single cell (finest), higher level = coarser.
//!
//! ```text
//! Node side = 2^level cells
//! Child i origin = origin + CHILD_OFFSETS[i] * 2^(level - 1)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `NodeTag`, `OctreeNode` - node tags and positions
//! - [`decoder`]: `decode`, `decode_node` - recursive descent over the stream
//! - [`stats`]: `DecodeStats` - counters from one decode

pub mod decoder;
pub mod node;
pub mod stats;

// Re-exports
pub use decoder::{decode, decode_node, DecodedVolume, EdgeIntersection};
pub use node::{NodeTag, OctreeNode};
pub use stats::DecodeStats;
