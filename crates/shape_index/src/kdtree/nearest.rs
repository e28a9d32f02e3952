//! Branch-and-bound nearest-neighbor query for the KD-tree.

use glam::Vec3;

use super::{KdTree, AXES};
use crate::error::Error;
use crate::point::ensure_finite;

impl KdTree {
  /// Find the stored point minimizing distance to `query`.
  ///
  /// Recursive branch-and-bound: descend the child on the query's side of
  /// the splitting plane first, then visit the far child only if the
  /// splitting plane is closer than the current best candidate. Average
  /// cost stays sublinear; the worst case degrades with tree imbalance.
  ///
  /// # Errors
  /// [`Error::EmptyTree`] when no point exists to return, and
  /// [`Error::NonFinitePoint`] for NaN/infinite query coordinates.
  pub fn nearest_neighbor(&self, query: Vec3) -> Result<Vec3, Error> {
    ensure_finite(query)?;
    let root = self.root.ok_or(Error::EmptyTree)?;
    let mut best = self.nodes[root as usize].point;
    let mut best_sq = f32::INFINITY;
    self.nearest_recurse(root, query, 0, &mut best, &mut best_sq);
    Ok(best)
  }

  fn nearest_recurse(
    &self,
    id: u32,
    query: Vec3,
    depth: usize,
    best: &mut Vec3,
    best_sq: &mut f32,
  ) {
    let node = &self.nodes[id as usize];
    let dist_sq = query.distance_squared(node.point);
    if dist_sq < *best_sq {
      *best_sq = dist_sq;
      *best = node.point;
    }

    let axis = depth % AXES;
    let plane_delta = query[axis] - node.point[axis];
    let (near, far) = if plane_delta < 0.0 {
      (node.left, node.right)
    } else {
      (node.right, node.left)
    };

    if let Some(near) = near {
      self.nearest_recurse(near, query, depth + 1, best, best_sq);
    }
    // Prune: the far subtree can only win if the splitting plane itself is
    // closer than the best candidate found so far.
    if plane_delta * plane_delta < *best_sq {
      if let Some(far) = far {
        self.nearest_recurse(far, query, depth + 1, best, best_sq);
      }
    }
  }
}

#[cfg(test)]
#[path = "nearest_test.rs"]
mod nearest_test;
