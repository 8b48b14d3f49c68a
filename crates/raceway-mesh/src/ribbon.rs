//! Extrude a sampled centerline into a constant-width road ribbon.

use raceway_core::{RacewayError, Result};
use raceway_geometry::{sample_catmull_rom, CatmullRomCurve};
use raceway_math::{Point2, Point3, UP};
use serde::{Deserialize, Serialize};

use crate::MeshBuffer;

/// Road cross-section settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RibbonConfig {
    /// Full road width; edge vertices sit half this distance either side
    /// of the centerline.
    pub width: f64,
    /// Vertical offset applied to both edges.
    pub height_offset: f64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            height_offset: 0.0,
        }
    }
}

/// Build a ribbon mesh following a polyline centerline.
///
/// Each sample contributes a left and a right edge vertex offset
/// perpendicular to the travel direction, and consecutive sample pairs are
/// stitched with two triangles wound so the derived normals face up. UVs
/// run `u` across the road and `v` along it.
///
/// The polyline is always treated as open: no seam triangles are emitted
/// between the last and first samples even when the centerline came from a
/// looping curve.
pub fn build_ribbon(centerline: &[Point3], config: &RibbonConfig) -> Result<MeshBuffer> {
    let count = centerline.len();
    if count < 2 {
        return Err(RacewayError::Configuration(format!(
            "Ribbon needs at least 2 centerline points, got {}",
            count
        )));
    }

    let mut positions = Vec::with_capacity(count * 2);
    let mut uvs = Vec::with_capacity(count * 2);
    let mut indices = Vec::with_capacity((count - 1) * 6);
    let lift = UP * config.height_offset;

    for i in 0..count {
        // The last sample reuses the direction of the segment behind it
        let forward = if i < count - 1 {
            (centerline[i + 1] - centerline[i]).normalize_or_zero()
        } else {
            (centerline[i] - centerline[i - 1]).normalize_or_zero()
        };
        // Degenerate when the path runs parallel to UP
        let left = forward.cross(UP).normalize_or_zero() * (config.width / 2.0);

        positions.push(centerline[i] + left + lift);
        positions.push(centerline[i] - left + lift);

        let v = i as f64 / (count - 1) as f64;
        uvs.push(Point2::new(0.0, v));
        uvs.push(Point2::new(1.0, v));

        if i < count - 1 {
            let base = (i * 2) as u32;
            indices.extend_from_slice(&[base, base + 2, base + 1]);
            indices.extend_from_slice(&[base + 1, base + 2, base + 3]);
        }
    }

    let mut mesh = MeshBuffer {
        positions,
        normals: vec![],
        uvs,
        indices,
    };
    mesh.compute_normals();
    Ok(mesh)
}

/// Resample a Catmull-Rom curve and extrude it into a road mesh.
pub fn build_road(
    curve: &CatmullRomCurve,
    resolution_per_segment: usize,
    config: &RibbonConfig,
) -> Result<MeshBuffer> {
    let centerline = sample_catmull_rom(curve, resolution_per_segment)?;
    build_ribbon(&centerline, config)
}
