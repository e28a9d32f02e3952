//! Similarity engine: decide whether two indexed point sets represent
//! geometrically similar shapes.
//!
//! Two independent metrics are provided:
//!
//! - [`compare_kd`]: bidirectional nearest-neighbor (Hausdorff-like)
//!   distance over KD-tree contents
//! - [`compare_octree`]: recursive node-wise similarity over octree
//!   structure, scored as a percentage of matching node pairs
//!
//! # Module Structure
//!
//! - [`kd`]: distance metric with parallel per-point fan-out
//! - [`octree`]: structural score over corresponding node pairs

pub mod kd;
pub mod octree;

pub use kd::{compare_kd, KdComparison};
pub use octree::{compare_octree, OctreeComparison};
