//! shape_index - spatial point indexes with shape similarity comparison
//!
//! This crate indexes finite sets of 3-D points (typically sampled from mesh
//! models) with one of two interchangeable structures and decides whether two
//! point sets represent geometrically similar shapes:
//!
//! - **KD-tree**: binary space partitioning by alternating coordinate axis;
//!   exact search plus nearest-neighbor queries with branch-and-bound pruning
//! - **Octree**: eight-way partitioning of axis-aligned boxes with
//!   bounded-capacity leaves that subdivide on overflow
//!
//! The similarity engine offers two metrics:
//!
//! - [`compare_kd`]: bidirectional nearest-neighbor (Hausdorff-like) distance
//!   between the contents of two KD-trees
//! - [`compare_octree`]: recursive node-wise structural similarity between two
//!   octrees, scored as a percentage of matching node pairs
//!
//! Loading, normalizing, and sampling point clouds is the caller's concern;
//! the crate consumes an in-memory sequence of [`Vec3`] values.
//!
//! # Example
//!
//! ```
//! use shape_index::{compare_kd, KdTree, Vec3};
//!
//! let mut a = KdTree::new();
//! let mut b = KdTree::new();
//! for p in [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)] {
//!   a.insert(p)?;
//!   b.insert(p)?;
//! }
//!
//! let report = compare_kd(&a, &b, 0.1)?;
//! assert_eq!(report.distance, 0.0);
//! assert!(report.is_similar);
//! # Ok::<(), shape_index::Error>(())
//! ```

pub mod aabb;
pub mod error;
pub mod kdtree;
pub mod octree;
pub mod similarity;

mod point;

// Re-export commonly used items
pub use aabb::Aabb;
pub use error::Error;
pub use kdtree::KdTree;
pub use octree::Octree;
pub use similarity::{compare_kd, compare_octree, KdComparison, OctreeComparison};

// Points are plain glam vectors; equality is exact component-wise comparison.
pub use glam::Vec3;
