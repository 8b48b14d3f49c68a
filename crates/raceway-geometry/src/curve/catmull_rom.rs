//! Uniform Catmull-Rom track curve.

use raceway_core::traits::Validate;
use raceway_core::{RacewayError, Result};
use raceway_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A track curve through an ordered list of control points, evaluated with
/// the uniform (4-point) Catmull-Rom basis.
///
/// Each segment runs between two consecutive control points; the two outer
/// neighbors shape the tangents. When `looping` is set, segment indexing
/// wraps so the last point connects back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatmullRomCurve {
    points: Vec<Point3>,
    looping: bool,
}

impl CatmullRomCurve {
    /// Build a curve, requiring at least 4 control points.
    pub fn new(points: Vec<Point3>, looping: bool) -> Result<Self> {
        let curve = Self { points, looping };
        curve.validate()?;
        Ok(curve)
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Number of traversable segments.
    ///
    /// Looping curves start a segment at every control point; open curves
    /// reserve the first and last point pairs for tangent shaping only, so
    /// segment indices stay in `0..N-3` and the modular neighbor lookup
    /// never bridges the last point back to the first.
    pub fn segment_count(&self) -> usize {
        if self.looping {
            self.points.len()
        } else {
            self.points.len() - 3
        }
    }

    /// Evaluate `segment` at local parameter `t` in `[0, 1]`.
    pub fn position(&self, segment: usize, t: f64) -> Point3 {
        let n = self.points.len();
        let p0 = self.points[(segment + n - 1) % n];
        let p1 = self.points[segment % n];
        let p2 = self.points[(segment + 1) % n];
        let p3 = self.points[(segment + 2) % n];

        0.5 * (2.0 * p1
            + (-p0 + p2) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * (t * t)
            + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * (t * t * t))
    }

    /// Derivative of `position` with respect to the local parameter.
    pub fn derivative(&self, segment: usize, t: f64) -> Vector3 {
        let n = self.points.len();
        let p0 = self.points[(segment + n - 1) % n];
        let p1 = self.points[segment % n];
        let p2 = self.points[(segment + 1) % n];
        let p3 = self.points[(segment + 2) % n];

        0.5 * ((-p0 + p2)
            + 2.0 * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t
            + 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * (t * t))
    }

    /// Position a small `step` ahead of `(segment, t)`, rolling into the
    /// next segment when the step crosses a boundary.
    ///
    /// On an open curve a step past the final segment stays put, so callers
    /// keep a stable heading at the terminal boundary.
    pub fn position_ahead(&self, segment: usize, t: f64, step: f64) -> Point3 {
        let mut t_ahead = t + step;
        let mut seg_ahead = segment;
        if t_ahead >= 1.0 {
            t_ahead -= 1.0;
            seg_ahead += 1;
            if seg_ahead >= self.segment_count() {
                seg_ahead = if self.looping { 0 } else { segment };
            }
        }
        self.position(seg_ahead, t_ahead)
    }

    /// Map a global parameter in `[0, 1]` to `(segment, local t)`.
    fn split_global(&self, t: f64) -> (usize, f64) {
        let segments = self.segment_count();
        let scaled = t.clamp(0.0, 1.0) * segments as f64;
        let mut segment = scaled.floor() as usize;
        if segment >= segments {
            // t = 1 lands on the end of the final segment
            segment = segments - 1;
        }
        (segment, scaled - segment as f64)
    }
}

impl Validate for CatmullRomCurve {
    fn validate(&self) -> Result<()> {
        if self.points.len() < 4 {
            return Err(RacewayError::Configuration(format!(
                "Catmull-Rom curve needs at least 4 control points, got {}",
                self.points.len()
            )));
        }
        Ok(())
    }
}

impl Curve for CatmullRomCurve {
    fn point_at(&self, t: f64) -> Point3 {
        let (segment, local) = self.split_global(t);
        self.position(segment, local)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (segment, local) = self.split_global(t);
        self.derivative(segment, local)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.looping
    }
}
