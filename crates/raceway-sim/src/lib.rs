//! Raceway simulation: per-tick advancement along track curves, velocity
//! integration, and race bookkeeping.

pub mod gauge;
pub mod motion;
pub mod race;
pub mod tracker;

pub use gauge::{speed_fraction, GaugeThresholds, SpeedZone};
pub use motion::{MotionConfig, Throttle};
pub use race::{RaceOutcome, RaceSession};
pub use tracker::{Advance, SegmentTracker};
