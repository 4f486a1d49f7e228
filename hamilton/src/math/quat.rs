use crate::error::{Error, Result};
use crate::math::*;
use approx::AbsDiffEq;
use bytemuck::NoUninit;
use std::fmt;

/// Quaternion `w + xi + yj + zk` with finite `f64` components.
///
/// Values are immutable: every operation returns a new quaternion. The
/// checked constructors reject NaN and infinities, and the division-based
/// operations ([`Quat::normalized`], [`Quat::inverse`], [`Quat::checked_div`])
/// report a zero-norm divisor instead of producing non-finite components.
/// The arithmetic operators are plain componentwise/Hamilton arithmetic and
/// never fail; use [`Quat::validated`] when operands may be large enough to
/// overflow.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, NoUninit)]
pub struct Quat {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quat {
    pub const ZERO: Quat = Quat::raw(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Quat = Quat::raw(1.0, 0.0, 0.0, 0.0);
    pub const I: Quat = Quat::raw(0.0, 1.0, 0.0, 0.0);
    pub const J: Quat = Quat::raw(0.0, 0.0, 1.0, 0.0);
    pub const K: Quat = Quat::raw(0.0, 0.0, 0.0, 1.0);

    const fn raw(w: f64, x: f64, y: f64, z: f64) -> Quat {
        Quat { w, x, y, z }
    }

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Result<Quat> {
        Quat::raw(w, x, y, z).validated()
    }

    pub fn from_scalar_vector(w: f64, v: Vec3) -> Result<Quat> {
        Quat::new(w, v.x, v.y, v.z)
    }

    /// Embeds a 3D vector as `(0, x, y, z)`.
    pub fn pure(v: Vec3) -> Result<Quat> {
        Quat::from_scalar_vector(0.0, v)
    }

    /// Unit quaternion rotating by `angle` radians about `axis`.
    ///
    /// The axis does not have to be unit length, only non-zero; a zero axis
    /// yields `InvalidAxis`. The result is `(cos(angle/2), sin(angle/2) * axis)`,
    /// renormalized to absorb rounding.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Result<Quat> {
        let axis = axis.normalized().map_err(|err| match err {
            Error::DivisionByZero => Error::InvalidAxis,
            other => other,
        })?;
        if !angle.is_finite() {
            return Err(Error::InvalidValue);
        }
        let (sin, cos) = (angle * 0.5).sin_cos();
        Quat::from_scalar_vector(cos, axis * sin)?.normalized()
    }

    pub fn w(self) -> f64 {
        self.w
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn z(self) -> f64 {
        self.z
    }

    pub fn scalar(self) -> f64 {
        self.w
    }

    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Components in `(w, x, y, z)` order.
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn is_finite(self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }

    /// Returns `self` if all components are finite, `InvalidValue` otherwise.
    pub fn validated(self) -> Result<Quat> {
        if self.is_finite() { Ok(self) } else { Err(Error::InvalidValue) }
    }

    pub fn is_pure(self, tolerance: impl Into<Tolerance>) -> bool {
        tolerance.into().is_zero(self.w)
    }

    pub fn is_unit(self, tolerance: impl Into<Tolerance>) -> bool {
        tolerance.into().within(self.norm(), 1.0)
    }

    pub fn conjugate(self) -> Quat {
        Quat::raw(self.w, -self.x, -self.y, -self.z)
    }

    pub fn norm_squared(self) -> f64 {
        dot(self, self)
    }

    /// NaN if any component is NaN, infinite if any other component is.
    pub fn norm(self) -> f64 {
        if !self.is_finite() {
            return self.as_array().iter().map(|c| c.abs()).sum();
        }
        match self.scaled_down() {
            Some((max, scaled)) => max * scaled.norm_squared().sqrt(),
            None => 0.0,
        }
    }

    /// `self / |self|`, or `DivisionByZero` for the zero quaternion.
    pub fn normalized(self) -> Result<Quat> {
        let (_, scaled) = self.validated()?.scaled_down().ok_or(Error::DivisionByZero)?;
        scaled.checked_div_scalar(scaled.norm_squared().sqrt())
    }

    /// `conjugate / |self|^2`, or `DivisionByZero` for the zero quaternion.
    pub fn inverse(self) -> Result<Quat> {
        let (max, scaled) = self.validated()?.scaled_down().ok_or(Error::DivisionByZero)?;
        // q^-1 = conj(s) / (max * |s|^2) with q = max * s
        scaled.conjugate().checked_div_scalar(max * scaled.norm_squared())
    }

    /// `self * rhs^-1`
    pub fn checked_div(self, rhs: Quat) -> Result<Quat> {
        (self.validated()? * rhs.inverse()?).validated()
    }

    pub fn checked_div_scalar(self, scalar: f64) -> Result<Quat> {
        if scalar == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Quat::raw(self.w / scalar, self.x / scalar, self.y / scalar, self.z / scalar).validated()
    }

    pub fn scale(self, scalar: f64) -> Quat {
        self * scalar
    }

    pub fn equals(self, other: Quat, tolerance: impl Into<Tolerance>) -> bool {
        self.abs_diff_eq(&other, tolerance.into().value())
    }

    fn max_abs(self) -> f64 {
        self.as_array().iter().fold(0.0, |acc: f64, c| acc.max(c.abs()))
    }

    // Divides by the largest absolute component so that squaring neither
    // overflows nor underflows. None for the zero quaternion; expects finite
    // components.
    fn scaled_down(self) -> Option<(f64, Quat)> {
        let max = self.max_abs();
        if max == 0.0 {
            return None;
        }
        Some((max, Quat::raw(self.w / max, self.x / max, self.y / max, self.z / max)))
    }
}

impl Dot for Quat {
    fn dot(self, rhs: Quat) -> f64 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Default for Quat {
    fn default() -> Self {
        Quat::ZERO
    }
}

// -Quat
impl std::ops::Neg for Quat {
    type Output = Quat;
    fn neg(self) -> Quat {
        Quat::raw(-self.w, -self.x, -self.y, -self.z)
    }
}

// Quat + Quat
impl std::ops::Add for Quat {
    type Output = Quat;
    fn add(self, rhs: Quat) -> Quat {
        Quat::raw(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Quat + f64, only the scalar part changes
impl std::ops::Add<f64> for Quat {
    type Output = Quat;
    fn add(self, rhs: f64) -> Quat {
        Quat::raw(self.w + rhs, self.x, self.y, self.z)
    }
}

// Quat - Quat
impl std::ops::Sub for Quat {
    type Output = Quat;
    fn sub(self, rhs: Quat) -> Quat {
        Quat::raw(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Quat - f64
impl std::ops::Sub<f64> for Quat {
    type Output = Quat;
    fn sub(self, rhs: f64) -> Quat {
        Quat::raw(self.w - rhs, self.x, self.y, self.z)
    }
}

// Hamilton product, i*i = j*j = k*k = ijk = -1
impl std::ops::Mul for Quat {
    type Output = Quat;
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

// Quat * f64
impl std::ops::Mul<f64> for Quat {
    type Output = Quat;
    fn mul(self, scalar: f64) -> Quat {
        Quat::raw(self.w * scalar, self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

// f64 * Quat
impl std::ops::Mul<Quat> for f64 {
    type Output = Quat;
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Tolerance::DEFAULT.value()
    }

    fn abs_diff_eq(&self, other: &Quat, epsilon: f64) -> bool {
        self.as_array().iter().zip(other.as_array()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

// 4-5i+7j-3k
impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.w)?;
        for (value, unit) in [(self.x, 'i'), (self.y, 'j'), (self.z, 'k')] {
            if value.is_sign_positive() {
                write!(f, "+")?;
            }
            write!(f, "{value}{unit}")?;
        }
        Ok(())
    }
}
