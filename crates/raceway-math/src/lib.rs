pub mod aabb;
pub mod heading;

pub use glam::{DVec2, DVec3};
pub use aabb::Aabb3;
pub use heading::look_direction;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;

/// World up axis used for ribbon extrusion and headings.
pub const UP: Vector3 = DVec3::Y;
