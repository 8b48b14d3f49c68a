//! Curve traits and implementations.

mod anchor;
mod catmull_rom;

use raceway_math::{Point3, Vector3};

pub use anchor::{Anchor, AnchorCurve};
pub use catmull_rom::CatmullRomCurve;

/// Trait for parametric track curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve wraps back onto its start.
    fn is_closed(&self) -> bool {
        false
    }
}
