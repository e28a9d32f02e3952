//! Octree node storage and octant routing.

use glam::Vec3;
use smallvec::SmallVec;

use crate::aabb::Aabb;

/// Points a leaf holds before it subdivides.
pub const LEAF_CAPACITY: usize = 8;

/// Subdivision stops here; a full leaf at the cap grows past capacity
/// instead, so coincident points cannot recurse forever.
pub const MAX_DEPTH: u8 = 32;

/// Inline storage for leaf contents, sized to the subdivision capacity.
pub(crate) type LeafContents = SmallVec<[Vec3; LEAF_CAPACITY]>;

/// One arena slot: the region it covers and its leaf/internal state.
#[derive(Debug)]
pub(crate) struct OctNode {
  pub(crate) region: Aabb,
  pub(crate) center: Vec3,
  pub(crate) depth: u8,
  pub(crate) kind: NodeKind,
}

/// Leaf/internal is a type-level distinction: an internal node always has
/// exactly 8 children and no contents of its own.
#[derive(Debug)]
pub(crate) enum NodeKind {
  Leaf(LeafContents),
  Internal([u32; 8]),
}

impl OctNode {
  pub(crate) fn leaf(region: Aabb, depth: u8) -> Self {
    Self {
      center: region.center(),
      region,
      depth,
      kind: NodeKind::Leaf(LeafContents::new()),
    }
  }
}

/// 3-bit octant code selecting the child a point belongs to.
///
/// - bit 2 set when `point.x >= center.x`
/// - bit 1 set when `point.y >= center.y`
/// - bit 0 set when `point.z >= center.z`
///
/// The same rule routes insertion and search, and matches the half each
/// [`Aabb::octant`] box covers.
#[inline]
pub(crate) fn octant_index(center: Vec3, point: Vec3) -> u8 {
  let mut code = 0;
  if point.x >= center.x {
    code |= 0b100;
  }
  if point.y >= center.y {
    code |= 0b010;
  }
  if point.z >= center.z {
    code |= 0b001;
  }
  code
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
