//! Axis-aligned bounding box used for octree regions.

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Defines the region an octree node covers. Subdividing a region at its
/// center yields eight octant boxes that exactly partition it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  /// Minimum corner (inclusive).
  pub min: Vec3,
  /// Maximum corner (inclusive).
  pub max: Vec3,
}

impl Aabb {
  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Create a new AABB from center and half-extents.
  ///
  /// Used to bootstrap an octree root region around its first point.
  pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Check if this AABB contains a point.
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
      && point.z >= self.min.z
      && point.z <= self.max.z
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }

  /// Get the box of one octant, splitting this AABB at its center.
  ///
  /// Octant code bits select the upper half along each axis:
  /// - bit 2: x >= center.x
  /// - bit 1: y >= center.y
  /// - bit 0: z >= center.z
  ///
  /// The eight octants exactly partition the parent with no gap or overlap.
  pub fn octant(&self, code: u8) -> Self {
    debug_assert!(code < 8, "octant code must be in 0..8");
    let c = self.center();
    let (min_x, max_x) = if code & 0b100 != 0 {
      (c.x, self.max.x)
    } else {
      (self.min.x, c.x)
    };
    let (min_y, max_y) = if code & 0b010 != 0 {
      (c.y, self.max.y)
    } else {
      (self.min.y, c.y)
    };
    let (min_z, max_z) = if code & 0b001 != 0 {
      (c.z, self.max.z)
    } else {
      (self.min.z, c.z)
    };
    Self::new(
      Vec3::new(min_x, min_y, min_z),
      Vec3::new(max_x, max_y, max_z),
    )
  }
}
