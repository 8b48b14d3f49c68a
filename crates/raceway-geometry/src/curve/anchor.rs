//! Anchor/handle track curve (cubic Bezier spans).

use raceway_core::traits::Validate;
use raceway_core::{RacewayError, Result};
use raceway_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A curve point with independent incoming and outgoing tangent handles.
///
/// An unset handle collapses to the anchor's own position, which pulls that
/// end of the span toward a straight line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Point3,
    pub handle_in: Option<Point3>,
    pub handle_out: Option<Point3>,
}

impl Anchor {
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            handle_in: None,
            handle_out: None,
        }
    }

    pub fn with_handles(position: Point3, handle_in: Point3, handle_out: Point3) -> Self {
        Self {
            position,
            handle_in: Some(handle_in),
            handle_out: Some(handle_out),
        }
    }

    /// Handle facing the previous anchor, defaulting to the anchor itself.
    pub fn incoming(&self) -> Point3 {
        self.handle_in.unwrap_or(self.position)
    }

    /// Handle facing the next anchor, defaulting to the anchor itself.
    pub fn outgoing(&self) -> Point3 {
        self.handle_out.unwrap_or(self.position)
    }
}

/// A track curve of cubic Bezier spans between consecutive anchors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorCurve {
    anchors: Vec<Anchor>,
    closed_loop: bool,
}

impl AnchorCurve {
    /// Build a curve, requiring at least 2 anchors.
    pub fn new(anchors: Vec<Anchor>, closed_loop: bool) -> Result<Self> {
        let curve = Self {
            anchors,
            closed_loop,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    /// Number of Bezier spans: one per anchor pair, plus the wrap-around
    /// span when the loop is closed.
    pub fn span_count(&self) -> usize {
        if self.closed_loop {
            self.anchors.len()
        } else {
            self.anchors.len() - 1
        }
    }

    /// Evaluate at a global parameter `t` in `[0, 1]` spanning all spans.
    pub fn position_at(&self, t: f64) -> Point3 {
        let n = self.anchors.len();
        let spans = self.span_count();
        let scaled = t.clamp(0.0, 1.0) * spans as f64;
        let mut span = scaled.floor() as usize;
        if span >= spans {
            // t = 1 lands on the end of the final span
            span = spans - 1;
        }
        let local = scaled - span as f64;

        let i0 = span % n;
        let i1 = (i0 + 1) % n;
        let a = &self.anchors[i0];
        let b = &self.anchors[i1];

        cubic_point(a.position, a.outgoing(), b.incoming(), b.position, local)
    }

    /// Derivative with respect to the global parameter.
    pub fn derivative_at(&self, t: f64) -> Vector3 {
        let n = self.anchors.len();
        let spans = self.span_count();
        let scaled = t.clamp(0.0, 1.0) * spans as f64;
        let mut span = scaled.floor() as usize;
        if span >= spans {
            span = spans - 1;
        }
        let local = scaled - span as f64;

        let i0 = span % n;
        let i1 = (i0 + 1) % n;
        let a = &self.anchors[i0];
        let b = &self.anchors[i1];

        cubic_derivative(a.position, a.outgoing(), b.incoming(), b.position, local)
            * spans as f64
    }
}

/// De Casteljau evaluation of a cubic Bezier span.
fn cubic_point(a: Point3, b: Point3, c: Point3, d: Point3, t: f64) -> Point3 {
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    let cd = c.lerp(d, t);
    let abbc = ab.lerp(bc, t);
    let bccd = bc.lerp(cd, t);
    abbc.lerp(bccd, t)
}

fn cubic_derivative(a: Point3, b: Point3, c: Point3, d: Point3, t: f64) -> Vector3 {
    let u = 1.0 - t;
    3.0 * (u * u * (b - a) + 2.0 * u * t * (c - b) + t * t * (d - c))
}

impl Validate for AnchorCurve {
    fn validate(&self) -> Result<()> {
        if self.anchors.len() < 2 {
            return Err(RacewayError::Configuration(format!(
                "Anchor curve needs at least 2 anchors, got {}",
                self.anchors.len()
            )));
        }
        Ok(())
    }
}

impl Curve for AnchorCurve {
    fn point_at(&self, t: f64) -> Point3 {
        self.position_at(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.closed_loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use raceway_math::DVec3;

    #[test]
    fn test_too_few_anchors() {
        let err = AnchorCurve::new(vec![Anchor::new(DVec3::new(0.0, 0.0, 0.0))], false);
        assert!(matches!(err, Err(RacewayError::Configuration(_))));
    }

    #[test]
    fn test_endpoints_interpolate_anchors() {
        let curve = AnchorCurve::new(
            vec![
                Anchor::with_handles(
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(-1.0, 0.0, 0.0),
                    DVec3::new(1.0, 1.0, 0.0),
                ),
                Anchor::with_handles(
                    DVec3::new(4.0, 0.0, 0.0),
                    DVec3::new(3.0, 1.0, 0.0),
                    DVec3::new(5.0, 0.0, 0.0),
                ),
            ],
            false,
        )
        .unwrap();

        let start = curve.position_at(0.0);
        let end = curve.position_at(1.0);
        assert!((start - DVec3::new(0.0, 0.0, 0.0)).length() < 1e-12);
        assert!((end - DVec3::new(4.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_known_bezier_midpoint() {
        // Cubic Bezier midpoint: (P0 + 3*P1 + 3*P2 + P3) / 8
        let curve = AnchorCurve::new(
            vec![
                Anchor::with_handles(
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(0.0, 4.0, 0.0),
                ),
                Anchor::with_handles(
                    DVec3::new(8.0, 0.0, 0.0),
                    DVec3::new(8.0, 4.0, 0.0),
                    DVec3::new(8.0, 0.0, 0.0),
                ),
            ],
            false,
        )
        .unwrap();

        let mid = curve.position_at(0.5);
        let expected = (DVec3::new(0.0, 0.0, 0.0)
            + 3.0 * DVec3::new(0.0, 4.0, 0.0)
            + 3.0 * DVec3::new(8.0, 4.0, 0.0)
            + DVec3::new(8.0, 0.0, 0.0))
            / 8.0;
        assert_relative_eq!(mid.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(mid.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(mid.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_default_handles_give_straight_line() {
        let curve = AnchorCurve::new(
            vec![
                Anchor::new(DVec3::new(0.0, 0.0, 0.0)),
                Anchor::new(DVec3::new(2.0, 0.0, 0.0)),
            ],
            false,
        )
        .unwrap();

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = curve.position_at(t);
            assert!(p.y.abs() < 1e-12);
            assert!(p.z.abs() < 1e-12);
            assert!(p.x >= -1e-12 && p.x <= 2.0 + 1e-12);
        }
    }

    #[test]
    fn test_closed_loop_returns_to_start() {
        let curve = AnchorCurve::new(
            vec![
                Anchor::new(DVec3::new(0.0, 0.0, 0.0)),
                Anchor::new(DVec3::new(4.0, 0.0, 0.0)),
                Anchor::new(DVec3::new(2.0, 0.0, 3.0)),
            ],
            true,
        )
        .unwrap();

        assert_eq!(curve.span_count(), 3);
        let start = curve.position_at(0.0);
        let end = curve.position_at(1.0);
        assert!(
            (start - end).length() < 1e-12,
            "closed loop should meet its start"
        );
    }

    #[test]
    fn test_span_count_open() {
        let curve = AnchorCurve::new(
            vec![
                Anchor::new(DVec3::new(0.0, 0.0, 0.0)),
                Anchor::new(DVec3::new(1.0, 0.0, 0.0)),
                Anchor::new(DVec3::new(2.0, 0.0, 0.0)),
            ],
            false,
        )
        .unwrap();
        assert_eq!(curve.span_count(), 2);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let curve = AnchorCurve::new(
            vec![
                Anchor::with_handles(
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(1.0, 2.0, 0.0),
                ),
                Anchor::with_handles(
                    DVec3::new(4.0, 0.0, 2.0),
                    DVec3::new(3.0, 2.0, 2.0),
                    DVec3::new(4.0, 0.0, 2.0),
                ),
            ],
            false,
        )
        .unwrap();

        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let analytic = curve.derivative_at(t);
            let numeric = (curve.position_at(t + h) - curve.position_at(t - h)) / (2.0 * h);
            assert!(
                (analytic - numeric).length() < 1e-5,
                "derivative mismatch at t={}",
                t
            );
        }
    }
}
