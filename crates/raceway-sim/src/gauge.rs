//! Speed readout helpers for UI consumers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedZone {
    Normal,
    Warning,
    Maximum,
}

/// Fractions of top speed at which the readout changes zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaugeThresholds {
    pub warning: f64,
    pub maximum: f64,
}

impl Default for GaugeThresholds {
    fn default() -> Self {
        Self {
            warning: 0.75,
            maximum: 0.95,
        }
    }
}

impl GaugeThresholds {
    pub fn zone(&self, velocity: f64, max_speed: f64) -> SpeedZone {
        let fraction = speed_fraction(velocity, max_speed);
        if fraction >= self.maximum {
            SpeedZone::Maximum
        } else if fraction > self.warning {
            SpeedZone::Warning
        } else {
            SpeedZone::Normal
        }
    }
}

/// Fraction of top speed in `[0, 1]`, direction-agnostic, for slider fills.
pub fn speed_fraction(velocity: f64, max_speed: f64) -> f64 {
    if max_speed <= 0.0 {
        return 0.0;
    }
    (velocity.abs() / max_speed).clamp(0.0, 1.0)
}
