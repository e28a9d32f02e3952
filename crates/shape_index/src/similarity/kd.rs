//! Bidirectional nearest-neighbor distance between two KD-trees.

use rayon::prelude::*;

use crate::error::Error;
use crate::kdtree::KdTree;

/// Verdict of a KD-tree comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KdComparison {
  /// `max(max_a_to_b, max_b_to_a)` of Euclidean nearest-neighbor distances.
  pub distance: f32,
  /// Whether `distance <= tolerance`.
  pub is_similar: bool,
}

/// Compare two KD-trees by approximate Hausdorff distance.
///
/// For every point of `a`, its nearest neighbor in `b` is queried and the
/// maximum distance tracked; symmetrically for `b` against `a`. The metric
/// is symmetric by construction and zero for identical point sets. The two
/// directions and the per-point queries run in parallel, which does not
/// alter the result.
///
/// Cost is O(|a| * depth(b) + |b| * depth(a)); without rebalancing the
/// worst case degrades toward quadratic.
///
/// # Errors
/// [`Error::EmptyTree`] when exactly one tree is empty (its counterpart's
/// points have no nearest neighbor). Two empty trees compare at distance 0.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "similarity::compare_kd")
)]
pub fn compare_kd(a: &KdTree, b: &KdTree, tolerance: f32) -> Result<KdComparison, Error> {
  if a.is_empty() && b.is_empty() {
    return Ok(KdComparison {
      distance: 0.0,
      is_similar: 0.0 <= tolerance,
    });
  }

  let (a_to_b, b_to_a) = rayon::join(|| directed_max(a, b), || directed_max(b, a));
  let distance = a_to_b?.max(b_to_a?);
  Ok(KdComparison {
    distance,
    is_similar: distance <= tolerance,
  })
}

/// Largest nearest-neighbor distance from `from`'s points into `to`.
fn directed_max(from: &KdTree, to: &KdTree) -> Result<f32, Error> {
  from
    .traverse()
    .par_iter()
    .map(|&p| Ok(p.distance(to.nearest_neighbor(p)?)))
    .try_reduce(|| 0.0_f32, |acc, d| Ok(acc.max(d)))
}

#[cfg(test)]
#[path = "kd_test.rs"]
mod kd_test;
