use glam::Vec3;

use super::*;

/// All 8 sign combinations around the center map to distinct codes.
#[test]
fn test_octant_index_all_8() {
  let center = Vec3::ZERO;
  let mut seen = [false; 8];
  for dx in [-1.0f32, 1.0] {
    for dy in [-1.0f32, 1.0] {
      for dz in [-1.0f32, 1.0] {
        let code = octant_index(center, Vec3::new(dx, dy, dz));
        let expected = (u8::from(dx > 0.0) << 2) | (u8::from(dy > 0.0) << 1) | u8::from(dz > 0.0);
        assert_eq!(code, expected);
        seen[code as usize] = true;
      }
    }
  }
  assert!(seen.iter().all(|&s| s), "all 8 octants reachable");
}

/// A point exactly on the center goes to the all-upper octant (>= rule).
#[test]
fn test_octant_index_center_goes_upper() {
  assert_eq!(octant_index(Vec3::splat(2.0), Vec3::splat(2.0)), 0b111);
}

/// The routing code and the octant box agree: a point inside the parent
/// region is contained by exactly the child box its code selects.
#[test]
fn test_octant_index_matches_octant_boxes() {
  let region = crate::aabb::Aabb::new(Vec3::splat(-4.0), Vec3::splat(4.0));
  let center = region.center();
  let probes = [
    Vec3::new(-1.0, -2.0, -3.0),
    Vec3::new(3.0, -1.0, 2.0),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-3.9, 3.9, 0.0),
  ];
  for point in probes {
    let code = octant_index(center, point);
    assert!(
      region.octant(code).contains_point(point),
      "point {point} not in octant {code}"
    );
  }
}
