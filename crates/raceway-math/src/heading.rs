//! Travel-direction helpers for look-ahead steering.

use raceway_core::Tolerance;

use crate::{Point3, Vector3};

/// Direction of travel from `current` toward a look-ahead sample.
///
/// Returns `None` when the two samples are too close to orient by (the
/// tolerance's heading guard), so callers can keep their previous rotation
/// instead of snapping to a noisy one.
pub fn look_direction(current: Point3, ahead: Point3, tolerance: Tolerance) -> Option<Vector3> {
    let offset = ahead - current;
    let distance = offset.length();
    if tolerance.can_orient(distance) {
        Some(offset / distance)
    } else {
        None
    }
}
