//! Raceway geometry: track curves and polyline resampling.

pub mod curve;
pub mod sample;

pub use curve::{Anchor, AnchorCurve, CatmullRomCurve, Curve};
pub use sample::{sample_anchor, sample_catmull_rom};
