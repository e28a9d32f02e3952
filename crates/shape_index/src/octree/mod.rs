//! Octree index over 3-D points.
//!
//! Eight-way spatial index over axis-aligned boxes. Leaves hold up to
//! [`LEAF_CAPACITY`] points; a full leaf subdivides into 8 octant children
//! and redistributes its contents, so internal nodes never hold points.
//! Nodes live in an arena owned by the tree and link to children by index.
//!
//! # Root bootstrap
//!
//! No bounding box is required up front: [`Octree::new`] starts rootless and
//! the first insert centers a cube of half-extent
//! [`DEFAULT_ROOT_HALF_EXTENT`] on that point. Callers that know their extent
//! can supply it with [`Octree::with_bounds`]. Points outside the root region
//! are still routed by center comparisons and land in boundary leaves;
//! search uses the same rule, so they stay retrievable.
//!
//! # Module Structure
//!
//! - `mod`: [`Octree`] - insert, exact search, traversal
//! - [`node`]: arena node storage and octant routing

use glam::Vec3;

use crate::aabb::Aabb;
use crate::error::Error;
use crate::point::ensure_finite;

pub mod node;

pub use node::{LEAF_CAPACITY, MAX_DEPTH};

use node::{octant_index, NodeKind, OctNode};

/// Half-extent of the root cube bootstrapped from the first inserted point.
/// Matches the unit neighborhood of normalized mesh samples.
pub const DEFAULT_ROOT_HALF_EXTENT: f32 = 1.0;

/// Octree over 3-D points, stored as an index-linked arena.
#[derive(Debug, Default)]
pub struct Octree {
  nodes: Vec<OctNode>,
  root: Option<u32>,
  /// Number of stored points (the arena length counts nodes, not points).
  len: usize,
  /// Region to give the root on first insert, when supplied up front.
  bounds: Option<Aabb>,
}

/// Outcome of probing one node during insertion.
enum Step {
  Descend(u32),
  Append,
  Split,
}

impl Octree {
  /// Create an empty tree whose root region is bootstrapped from the first
  /// inserted point.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an empty tree with an explicit root region.
  pub fn with_bounds(bounds: Aabb) -> Self {
    Self {
      bounds: Some(bounds),
      ..Self::default()
    }
  }

  /// Number of stored points.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Check if the tree holds no points.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Region covered by the root, once one exists.
  pub fn bounds(&self) -> Option<Aabb> {
    self
      .root
      .map(|id| self.nodes[id as usize].region)
      .or(self.bounds)
  }

  /// Insert a point, routing through internal nodes by octant code and
  /// appending to the selected leaf. A full leaf below [`MAX_DEPTH`]
  /// subdivides first and redistributes its contents.
  pub fn insert(&mut self, point: Vec3) -> Result<(), Error> {
    ensure_finite(point)?;
    let root = match self.root {
      Some(id) => id,
      None => {
        let region = self.bounds.unwrap_or_else(|| {
          Aabb::from_center_half_extents(point, Vec3::splat(DEFAULT_ROOT_HALF_EXTENT))
        });
        let id = self.nodes.len() as u32;
        self.nodes.push(OctNode::leaf(region, 0));
        self.root = Some(id);
        id
      }
    };
    self.insert_at(root, point)?;
    self.len += 1;
    Ok(())
  }

  fn insert_at(&mut self, mut id: u32, point: Vec3) -> Result<(), Error> {
    loop {
      let step = {
        let node = &self.nodes[id as usize];
        match &node.kind {
          NodeKind::Internal(children) => {
            Step::Descend(children[octant_index(node.center, point) as usize])
          }
          NodeKind::Leaf(contents) => {
            if contents.len() > LEAF_CAPACITY && node.depth < MAX_DEPTH {
              // A leaf can only exceed capacity at the depth cap.
              return Err(Error::LeafOverflow {
                len: contents.len(),
                capacity: LEAF_CAPACITY,
              });
            }
            if contents.len() < LEAF_CAPACITY || node.depth >= MAX_DEPTH {
              Step::Append
            } else {
              Step::Split
            }
          }
        }
      };
      match step {
        Step::Descend(child) => id = child,
        Step::Append => {
          if let NodeKind::Leaf(contents) = &mut self.nodes[id as usize].kind {
            contents.push(point);
          }
          return Ok(());
        }
        // The loop re-probes the node, now internal, and descends.
        Step::Split => self.subdivide(id),
      }
    }
  }

  /// Split a leaf into 8 octant children and redistribute its contents.
  ///
  /// Every previously held point is re-routed against the node's center;
  /// dropping points here would silently corrupt the index. No-op when the
  /// node has already been split.
  fn subdivide(&mut self, id: u32) {
    let (region, depth, contents) = {
      let node = &mut self.nodes[id as usize];
      let contents = match &mut node.kind {
        NodeKind::Leaf(contents) => std::mem::take(contents),
        NodeKind::Internal(_) => return,
      };
      (node.region, node.depth, contents)
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(depth, count = contents.len(), "octree subdivide");

    let mut children = [0u32; 8];
    for (octant, slot) in children.iter_mut().enumerate() {
      *slot = self.nodes.len() as u32;
      self
        .nodes
        .push(OctNode::leaf(region.octant(octant as u8), depth + 1));
    }

    let center = self.nodes[id as usize].center;
    self.nodes[id as usize].kind = NodeKind::Internal(children);
    for point in contents {
      let child = children[octant_index(center, point) as usize];
      if let NodeKind::Leaf(child_contents) = &mut self.nodes[child as usize].kind {
        child_contents.push(point);
      }
    }
  }

  /// Exact-match search: descend by octant code, then scan the leaf.
  ///
  /// False on an empty tree.
  pub fn search(&self, point: Vec3) -> bool {
    let mut current = self.root;
    while let Some(id) = current {
      let node = &self.nodes[id as usize];
      match &node.kind {
        NodeKind::Leaf(contents) => return contents.contains(&point),
        NodeKind::Internal(children) => {
          current = Some(children[octant_index(node.center, point) as usize]);
        }
      }
    }
    false
  }

  /// Collect every stored point, visiting children in fixed octant order
  /// (0..8). Deterministic, but not coordinate-sorted.
  pub fn traverse(&self) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(self.len);
    let mut stack = Vec::new();
    if let Some(root) = self.root {
      stack.push(root);
    }
    while let Some(id) = stack.pop() {
      match &self.nodes[id as usize].kind {
        NodeKind::Leaf(contents) => out.extend_from_slice(contents),
        NodeKind::Internal(children) => {
          // Reversed push so octant 0 pops first.
          for &child in children.iter().rev() {
            stack.push(child);
          }
        }
      }
    }
    out
  }

  /// Drop every node. No-op on an empty tree; explicit bounds survive for
  /// the next bootstrap.
  pub fn clear(&mut self) {
    self.nodes.clear();
    self.root = None;
    self.len = 0;
  }

  // Structural accessors for the node-wise similarity walk.

  pub(crate) fn root_id(&self) -> Option<u32> {
    self.root
  }

  /// Child in the given octant, or None for leaves.
  pub(crate) fn child(&self, id: u32, octant: usize) -> Option<u32> {
    match &self.nodes[id as usize].kind {
      NodeKind::Internal(children) => Some(children[octant]),
      NodeKind::Leaf(_) => None,
    }
  }

  /// Leaf contents; empty for internal nodes.
  pub(crate) fn contents_of(&self, id: u32) -> &[Vec3] {
    match &self.nodes[id as usize].kind {
      NodeKind::Leaf(contents) => contents,
      NodeKind::Internal(_) => &[],
    }
  }
}
