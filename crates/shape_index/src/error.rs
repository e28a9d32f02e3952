//! Error taxonomy for index operations.
//!
//! All conditions are local and recoverable; callers get explicit results,
//! never silent truncation. Search and traversal on an empty tree are
//! well-defined (false / empty sequence) and are not errors.

use glam::Vec3;
use thiserror::Error;

/// Failure conditions surfaced by the index and similarity operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  /// Nearest-neighbor query on a tree with no root. There is no point to
  /// return, so this must fail rather than fabricate one.
  #[error("nearest-neighbor query on an empty tree")]
  EmptyTree,

  /// A point with a NaN or infinite coordinate was supplied. Non-finite
  /// values break the axis comparisons both trees route by.
  #[error("point has a non-finite coordinate: {0}")]
  NonFinitePoint(Vec3),

  /// Internal consistency check: a leaf exceeded capacity without having
  /// been subdivided (and without the depth cap excusing it).
  #[error("leaf holds {len} points, over capacity {capacity}")]
  LeafOverflow {
    /// Observed leaf content count.
    len: usize,
    /// Configured leaf capacity.
    capacity: usize,
  },
}
