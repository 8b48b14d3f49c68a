/// Distance tolerances for geometric guards.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
    /// Minimum separation between two samples before a travel direction
    /// can be derived from them
    pub heading: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_HEADING: f64 = 1e-3;

    pub fn new(linear: f64, heading: f64) -> Self {
        Self { linear, heading }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            heading: Self::DEFAULT_HEADING,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            heading: 1e-2,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Whether a sample separation is large enough to orient by
    pub fn can_orient(self, distance: f64) -> bool {
        distance > self.heading
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
