//! Scalar velocity integration along the curve.

use serde::{Deserialize, Serialize};

/// Player input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Forward,
    Reverse,
    /// No input; friction decays the velocity toward zero.
    Coast,
}

/// Tuning for throttle-driven motion along a curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionConfig {
    pub acceleration: f64,
    pub friction: f64,
    pub max_speed: f64,
    /// Safety cutoff: a velocity magnitude beyond this is treated as a
    /// numerical spike and snapped back to unit magnitude, keeping its
    /// sign. Not a gameplay mechanic; keep it well above `max_speed`.
    pub spike_limit: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            acceleration: 2.0,
            friction: 2.0,
            max_speed: 8.0,
            spike_limit: 12.0,
        }
    }
}

impl MotionConfig {
    /// Advance a scalar velocity one tick of `dt` seconds under `throttle`.
    ///
    /// Coasting friction never pushes the velocity through zero, and the
    /// result is clamped to `[-max_speed, max_speed]`.
    pub fn integrate(&self, velocity: f64, throttle: Throttle, dt: f64) -> f64 {
        let mut v = velocity;
        match throttle {
            Throttle::Forward => v += self.acceleration * dt,
            Throttle::Reverse => v -= self.acceleration * dt,
            Throttle::Coast => {
                if v > 0.0 {
                    v = (v - self.friction * dt).max(0.0);
                } else if v < 0.0 {
                    v = (v + self.friction * dt).min(0.0);
                }
            }
        }

        if v.abs() > self.spike_limit {
            v = v.signum();
        }

        v.clamp(-self.max_speed, self.max_speed)
    }

    /// Variant for forward-only objects: same integration, clamped to
    /// `[0, max_speed]`.
    pub fn integrate_forward(&self, velocity: f64, throttle: Throttle, dt: f64) -> f64 {
        self.integrate(velocity, throttle, dt).max(0.0)
    }
}
