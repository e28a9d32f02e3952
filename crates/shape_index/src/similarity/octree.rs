//! Recursive node-wise similarity between two octrees.

use glam::Vec3;

use crate::octree::Octree;

/// Verdict of an octree comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeComparison {
  /// `100 * similar_nodes / total_nodes`.
  pub score: f32,
  /// Whether `score >= threshold_percent`.
  pub is_similar: bool,
}

#[derive(Default)]
struct Tally {
  total: u64,
  similar: u64,
}

/// Compare two octrees position-by-position.
///
/// Walks corresponding node pairs from the roots. A pair where both sides
/// are absent counts as a match; a pair with exactly one side present counts
/// that side as an unmatched node; a pair with both present counts one node,
/// matched when the two content sequences are pairwise within `tolerance`,
/// and recurses into the 8 corresponding child pairs. The score is the
/// percentage of matched pairs.
///
/// The metric is well-defined for unequal tree shapes, which necessarily
/// arise since each tree is built from its own bounds. Content comparison
/// is positional, not set-based, so it is sensitive to per-leaf insertion
/// order; that simplification is deliberate.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "similarity::compare_octree")
)]
pub fn compare_octree(
  a: &Octree,
  b: &Octree,
  tolerance: f32,
  threshold_percent: f32,
) -> OctreeComparison {
  let mut tally = Tally::default();
  tally_pair(a, a.root_id(), b, b.root_id(), tolerance, &mut tally);

  let score = if tally.total == 0 {
    100.0
  } else {
    100.0 * tally.similar as f32 / tally.total as f32
  };
  OctreeComparison {
    score,
    is_similar: score >= threshold_percent,
  }
}

fn tally_pair(
  a: &Octree,
  node_a: Option<u32>,
  b: &Octree,
  node_b: Option<u32>,
  tolerance: f32,
  tally: &mut Tally,
) {
  match (node_a, node_b) {
    // Nothing on either side: maximal similarity.
    (None, None) => {
      tally.total += 1;
      tally.similar += 1;
    }
    // Shape mismatch: the present side is an unmatched node.
    (Some(_), None) | (None, Some(_)) => {
      tally.total += 1;
    }
    (Some(ia), Some(ib)) => {
      tally.total += 1;
      if contents_match(a.contents_of(ia), b.contents_of(ib), tolerance) {
        tally.similar += 1;
      }
      // Mismatched shapes still need their node counts reconciled, so the
      // child pairs are visited regardless of leaf/internal status.
      for octant in 0..8 {
        tally_pair(a, a.child(ia, octant), b, b.child(ib, octant), tolerance, tally);
      }
    }
  }
}

/// Position-for-position closeness of two content sequences.
fn contents_match(a: &[Vec3], b: &[Vec3], tolerance: f32) -> bool {
  a.len() == b.len() && a.iter().zip(b).all(|(pa, pb)| pa.distance(*pb) <= tolerance)
}

#[cfg(test)]
#[path = "octree_test.rs"]
mod octree_test;
