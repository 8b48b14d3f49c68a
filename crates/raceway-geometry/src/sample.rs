//! Curve resampling into polylines for mesh extrusion and previews.

use raceway_core::{RacewayError, Result};
use raceway_math::Point3;

use crate::curve::{AnchorCurve, CatmullRomCurve};

/// Sample a Catmull-Rom curve at `resolution` points per segment.
///
/// Segment ends are not duplicated: each segment contributes its samples at
/// `t = j/resolution` for `j in 0..resolution`, and the next segment starts
/// exactly where the previous one left off. The result is an open polyline
/// even for looping curves; the final point of an open curve's last segment
/// is likewise omitted.
pub fn sample_catmull_rom(curve: &CatmullRomCurve, resolution: usize) -> Result<Vec<Point3>> {
    if resolution == 0 {
        return Err(RacewayError::Configuration(
            "Per-segment resolution must be at least 1".into(),
        ));
    }

    let mut points = Vec::with_capacity(curve.segment_count() * resolution);
    for segment in 0..curve.segment_count() {
        for step in 0..resolution {
            let t = step as f64 / resolution as f64;
            points.push(curve.position(segment, t));
        }
    }
    Ok(points)
}

/// Sample an anchor curve at `resolution + 1` evenly spaced global
/// parameters, endpoints included.
pub fn sample_anchor(curve: &AnchorCurve, resolution: usize) -> Result<Vec<Point3>> {
    if resolution == 0 {
        return Err(RacewayError::Configuration(
            "Curve resolution must be at least 1".into(),
        ));
    }

    let points = (0..=resolution)
        .map(|i| curve.position_at(i as f64 / resolution as f64))
        .collect();
    Ok(points)
}
