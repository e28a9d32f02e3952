//! KD-tree index over 3-D points.
//!
//! Binary space-partitioning tree keyed by an alternating coordinate axis:
//! `axis = depth mod 3` (0 = x, 1 = y, 2 = z). At each node, points strictly
//! less on the axis go left, points greater-or-equal go right. No rebalancing
//! is performed; the tree's shape is fully determined by insertion order.
//!
//! Nodes live in an arena owned by the tree and link to children by index,
//! so releasing the whole tree is dropping the arena.
//!
//! # Module Structure
//!
//! - `mod`: [`KdTree`] - insert, exact search, pre-order traversal
//! - `nearest`: branch-and-bound nearest-neighbor query

use glam::Vec3;

use crate::error::Error;
use crate::point::ensure_finite;

mod nearest;

/// Number of splitting axes; the axis cycles per depth.
const AXES: usize = 3;

/// One arena slot: a point and its two optional children.
#[derive(Debug)]
struct KdNode {
  point: Vec3,
  left: Option<u32>,
  right: Option<u32>,
}

impl KdNode {
  fn new(point: Vec3) -> Self {
    Self {
      point,
      left: None,
      right: None,
    }
  }
}

/// KD-tree over 3-D points, stored as an index-linked arena.
#[derive(Debug, Default)]
pub struct KdTree {
  nodes: Vec<KdNode>,
  root: Option<u32>,
}

impl KdTree {
  /// Create an empty tree.
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      root: None,
    }
  }

  /// Number of stored points.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Check if the tree holds no points.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Insert a point, routing by the alternating axis until a free child
  /// slot is found.
  ///
  /// Duplicates are not detected: re-inserting an equal point creates a
  /// second node, always routed right (equal fails the strict `<` test).
  pub fn insert(&mut self, point: Vec3) -> Result<(), Error> {
    ensure_finite(point)?;
    let new_id = self.nodes.len() as u32;

    let Some(mut current) = self.root else {
      self.nodes.push(KdNode::new(point));
      self.root = Some(new_id);
      return Ok(());
    };

    let mut axis = 0;
    loop {
      let node = &self.nodes[current as usize];
      let go_left = point[axis] < node.point[axis];
      let child = if go_left { node.left } else { node.right };
      match child {
        Some(next) => {
          current = next;
          axis = (axis + 1) % AXES;
        }
        None => {
          self.nodes.push(KdNode::new(point));
          let node = &mut self.nodes[current as usize];
          if go_left {
            node.left = Some(new_id);
          } else {
            node.right = Some(new_id);
          }
          return Ok(());
        }
      }
    }
  }

  /// Exact-match search, descending axis-by-axis as insertion does.
  ///
  /// O(depth); false on an empty tree.
  pub fn search(&self, point: Vec3) -> bool {
    let mut current = self.root;
    let mut axis = 0;
    while let Some(id) = current {
      let node = &self.nodes[id as usize];
      if node.point == point {
        return true;
      }
      current = if point[axis] < node.point[axis] {
        node.left
      } else {
        node.right
      };
      axis = (axis + 1) % AXES;
    }
    false
  }

  /// Collect every stored point in pre-order (node, left, right).
  ///
  /// Each inserted point appears exactly once; the order depends on
  /// construction history.
  pub fn traverse(&self) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(self.nodes.len());
    let mut stack = Vec::new();
    if let Some(root) = self.root {
      stack.push(root);
    }
    while let Some(id) = stack.pop() {
      let node = &self.nodes[id as usize];
      out.push(node.point);
      // Right pushed first so the left subtree is visited first.
      if let Some(right) = node.right {
        stack.push(right);
      }
      if let Some(left) = node.left {
        stack.push(left);
      }
    }
    out
  }

  /// Drop every node. No-op on an empty tree.
  pub fn clear(&mut self) {
    self.nodes.clear();
    self.root = None;
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
