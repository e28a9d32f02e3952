//! Point input validation.
//!
//! Points are plain `glam::Vec3` values with exact component-wise equality.
//! The only guard the indexes need is finiteness: NaN comparisons would
//! silently misroute a point past every axis test.

use glam::Vec3;

use crate::error::Error;

/// Reject NaN and infinite coordinates before they enter a tree.
pub(crate) fn ensure_finite(point: Vec3) -> Result<(), Error> {
  if point.is_finite() {
    Ok(())
  } else {
    Err(Error::NonFinitePoint(point))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_finite_point_accepted() {
    assert!(ensure_finite(Vec3::new(1.0, -2.5, 0.0)).is_ok());
  }

  #[test]
  fn test_nan_rejected() {
    // NaN != NaN, so match on the variant rather than the payload.
    let p = Vec3::new(0.0, f32::NAN, 0.0);
    assert!(matches!(ensure_finite(p), Err(Error::NonFinitePoint(_))));
  }

  #[test]
  fn test_infinity_rejected() {
    let p = Vec3::new(f32::INFINITY, 0.0, 0.0);
    assert!(ensure_finite(p).is_err());
  }
}
