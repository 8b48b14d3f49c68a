pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{RacewayError, Result};
pub use tolerance::Tolerance;
