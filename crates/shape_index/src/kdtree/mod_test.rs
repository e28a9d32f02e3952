use super::*;

fn sorted(mut points: Vec<Vec3>) -> Vec<Vec3> {
  points.sort_by(|a, b| {
    a.x
      .total_cmp(&b.x)
      .then(a.y.total_cmp(&b.y))
      .then(a.z.total_cmp(&b.z))
  });
  points
}

/// Deterministic pseudo-random cloud in [-1, 1]^3 (LCG, no rand dependency).
fn cloud(seed: u32, count: usize) -> Vec<Vec3> {
  let mut state = seed.wrapping_mul(747796405).wrapping_add(2891336453);
  let mut next = move || {
    state = state.wrapping_mul(1664525).wrapping_add(1013904223);
    (state >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
  };
  (0..count)
    .map(|_| Vec3::new(next(), next(), next()))
    .collect()
}

/// Collect the points of the subtree rooted at `id`.
fn subtree_points(tree: &KdTree, id: Option<u32>, out: &mut Vec<Vec3>) {
  if let Some(id) = id {
    let node = &tree.nodes[id as usize];
    out.push(node.point);
    subtree_points(tree, node.left, out);
    subtree_points(tree, node.right, out);
  }
}

/// Every left-subtree point must be strictly less on the node's axis, every
/// right-subtree point greater-or-equal.
fn assert_axis_invariant(tree: &KdTree, id: Option<u32>, depth: usize) {
  let Some(id) = id else { return };
  let node = &tree.nodes[id as usize];
  let axis = depth % AXES;

  let mut left = Vec::new();
  subtree_points(tree, node.left, &mut left);
  for p in &left {
    assert!(
      p[axis] < node.point[axis],
      "left subtree point {p} not strictly less on axis {axis} than {}",
      node.point
    );
  }

  let mut right = Vec::new();
  subtree_points(tree, node.right, &mut right);
  for p in &right {
    assert!(
      p[axis] >= node.point[axis],
      "right subtree point {p} less on axis {axis} than {}",
      node.point
    );
  }

  assert_axis_invariant(tree, node.left, depth + 1);
  assert_axis_invariant(tree, node.right, depth + 1);
}

#[test]
fn test_empty_tree_queries() {
  let tree = KdTree::new();
  assert!(tree.is_empty());
  assert_eq!(tree.len(), 0);
  assert!(!tree.search(Vec3::ZERO));
  assert!(tree.traverse().is_empty());
}

/// Concrete scenario: three points, hit, miss, and nearest.
#[test]
fn test_basic_scenario() {
  let mut tree = KdTree::new();
  tree.insert(Vec3::new(0.0, 0.0, 0.0)).unwrap();
  tree.insert(Vec3::new(1.0, 0.0, 0.0)).unwrap();
  tree.insert(Vec3::new(0.0, 1.0, 0.0)).unwrap();

  assert!(tree.search(Vec3::new(1.0, 0.0, 0.0)));
  assert!(!tree.search(Vec3::new(2.0, 2.0, 2.0)));
  assert_eq!(
    tree.nearest_neighbor(Vec3::new(0.9, 0.0, 0.0)).unwrap(),
    Vec3::new(1.0, 0.0, 0.0)
  );
}

/// traverse yields exactly the inserted multiset.
#[test]
fn test_traverse_round_trip() {
  let points = cloud(7, 128);
  let mut tree = KdTree::new();
  for &p in &points {
    tree.insert(p).unwrap();
  }
  assert_eq!(tree.len(), points.len());
  assert_eq!(sorted(tree.traverse()), sorted(points));
}

/// Every inserted point must be findable.
#[test]
fn test_search_finds_all_inserted() {
  let points = cloud(13, 64);
  let mut tree = KdTree::new();
  for &p in &points {
    tree.insert(p).unwrap();
  }
  for &p in &points {
    assert!(tree.search(p), "inserted point {p} not found");
  }
}

/// Duplicates create a second node and stay retrievable.
#[test]
fn test_duplicate_points_kept() {
  let p = Vec3::new(0.5, -0.25, 1.0);
  let mut tree = KdTree::new();
  tree.insert(p).unwrap();
  tree.insert(p).unwrap();
  assert_eq!(tree.len(), 2);
  assert!(tree.search(p));
  assert_eq!(tree.traverse(), vec![p, p]);
}

/// Axis ordering holds at every depth after arbitrary insertion.
#[test]
fn test_axis_invariant() {
  let mut tree = KdTree::new();
  for p in cloud(42, 200) {
    tree.insert(p).unwrap();
  }
  assert_axis_invariant(&tree, tree.root, 0);
}

#[test]
fn test_non_finite_insert_rejected() {
  let mut tree = KdTree::new();
  let err = tree.insert(Vec3::new(f32::NAN, 0.0, 0.0));
  assert!(matches!(err, Err(Error::NonFinitePoint(_))));
  assert!(tree.is_empty());
}

#[test]
fn test_clear() {
  let mut tree = KdTree::new();
  tree.insert(Vec3::ONE).unwrap();
  tree.clear();
  assert!(tree.is_empty());
  assert!(!tree.search(Vec3::ONE));

  // Clearing an already-empty tree is a no-op.
  tree.clear();
  assert!(tree.is_empty());
}
