/// Absolute, per-component tolerance for comparing floating-point values.
///
/// Quaternion arithmetic is never exact, so equality checks in this crate
/// take a tolerance instead of relying on `==`. The default of `1e-12` is
/// suitable for values of order one; callers working with larger magnitudes
/// or long chains of products should pass their own.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(1e-12);

    /// `value` must be finite and non-negative, otherwise no two values are
    /// ever within it.
    pub fn new(value: f64) -> Tolerance {
        debug_assert!(value >= 0.0 && value.is_finite(), "invalid tolerance {value}");
        Tolerance(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// |a - b| <= tolerance
    pub fn within(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    pub fn is_zero(self, a: f64) -> bool {
        self.within(a, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}

impl From<f64> for Tolerance {
    fn from(value: f64) -> Self {
        Tolerance::new(value)
    }
}
