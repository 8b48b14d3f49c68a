//! Road ribbon mesh generation.

pub mod buffer;
pub mod ribbon;

pub use buffer::MeshBuffer;
pub use ribbon::{build_ribbon, build_road, RibbonConfig};
