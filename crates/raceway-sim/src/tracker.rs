//! Segment/lap advancement state machine for objects moving along a curve.

use raceway_core::Tolerance;
use raceway_geometry::CatmullRomCurve;
use raceway_math::{look_direction, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Result of one advancement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub segment: usize,
    pub interpolation: f64,
    pub velocity: f64,
    /// Laps completed this tick: positive on forward wraparound, negative
    /// when reversing back across the curve start. The caller folds this
    /// into its own race state.
    pub lap_delta: i32,
}

/// Where a moving object sits on its curve: the current segment, the
/// interpolation fraction inside it, and the scalar velocity along it.
///
/// Trackers own no cross-object state; several may advance along the same
/// read-only curve independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SegmentTracker {
    pub segment: usize,
    pub interpolation: f64,
    pub velocity: f64,
}

impl SegmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the curve start, at rest.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Integrate velocity over `dt` and normalize the segment/fraction
    /// state, reporting any lap crossings.
    ///
    /// On a looping curve, walking off the last segment wraps to segment 0
    /// and counts a lap (negative when reversed). On an open curve either
    /// end is terminal: the position clamps there and velocity zeroes, so
    /// further ticks hold still.
    pub fn advance(&mut self, dt: f64, segment_count: usize, looping: bool) -> Advance {
        self.interpolation += self.velocity * dt;
        self.normalize(segment_count, looping)
    }

    fn normalize(&mut self, segment_count: usize, looping: bool) -> Advance {
        let mut lap_delta = 0;

        // One oversized step can cross several segment boundaries, so keep
        // shifting until the fraction is back in range.
        while self.interpolation >= 1.0 {
            self.interpolation -= 1.0;
            self.segment += 1;
            if self.segment >= segment_count {
                if looping {
                    self.segment = 0;
                    lap_delta += 1;
                } else {
                    self.segment = segment_count - 1;
                    self.interpolation = 1.0;
                    self.velocity = 0.0;
                    break;
                }
            }
        }

        while self.interpolation < 0.0 {
            self.interpolation += 1.0;
            if self.segment == 0 {
                if looping {
                    self.segment = segment_count - 1;
                    lap_delta -= 1;
                } else {
                    self.interpolation = 0.0;
                    self.velocity = 0.0;
                    break;
                }
            } else {
                self.segment -= 1;
            }
        }

        Advance {
            segment: self.segment,
            interpolation: self.interpolation,
            velocity: self.velocity,
            lap_delta,
        }
    }

    /// World position of the tracked object on `curve`.
    pub fn position_on(&self, curve: &CatmullRomCurve) -> Point3 {
        curve.position(self.segment, self.interpolation)
    }

    /// Travel direction from a small look-ahead sample on `curve`, or
    /// `None` when the samples are too close to orient by.
    pub fn heading_on(
        &self,
        curve: &CatmullRomCurve,
        look_ahead: f64,
        tolerance: Tolerance,
    ) -> Option<Vector3> {
        let current = self.position_on(curve);
        let ahead = curve.position_ahead(self.segment, self.interpolation, look_ahead);
        look_direction(current, ahead, tolerance)
    }
}
