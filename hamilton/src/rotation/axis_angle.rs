use crate::error::{Error, Result};
use crate::math::*;
use log::{trace, warn};
use std::fmt;

/// Largest scalar part a sandwich product may leave behind, relative to the
/// length of the rotated vector.
const SCALAR_RESIDUAL: f64 = 1e-9;

/// Rotation by `angle` radians about a unit `axis`, right-handed.
///
/// Stores the unit rotation quaternion `(cos(angle/2), sin(angle/2) * axis)`
/// so that rotating many points about the same axis builds it only once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    axis: Vec3,
    angle: f64,
    quat: Quat,
}

impl Rotation {
    pub fn identity() -> Rotation {
        Rotation { axis: Vec3::Z, angle: 0.0, quat: Quat::IDENTITY }
    }

    /// `InvalidAxis` for a zero axis, `InvalidValue` for non-finite input.
    pub fn new(axis: Vec3, angle: f64) -> Result<Rotation> {
        let quat = Quat::from_axis_angle(axis, angle)?;
        let axis = axis.normalized()?;
        trace!("rotation by {angle} rad about {axis}: {quat}");
        Ok(Rotation { axis, angle, quat })
    }

    pub fn with_axis(self, axis: Vec3) -> Result<Rotation> {
        Rotation::new(axis, self.angle)
    }

    pub fn with_angle(self, angle: f64) -> Result<Rotation> {
        Rotation::new(self.axis, angle)
    }

    /// Unit axis of rotation.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn scaled_axis(&self, factor: f64) -> Vec3 {
        self.axis * factor
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn quaternion(&self) -> Quat {
        self.quat
    }

    /// Same axis, opposite angle.
    pub fn inverse(&self) -> Rotation {
        Rotation { axis: self.axis, angle: -self.angle, quat: self.quat.conjugate() }
    }

    /// Rotation equivalent to applying `self` first and `next` second.
    ///
    /// The resulting angle is in `[0, 2π]`. When the composition is the
    /// identity the axis of `self` is kept.
    pub fn then(&self, next: &Rotation) -> Result<Rotation> {
        let quat = (next.quat * self.quat).normalized()?;
        let axis = match quat.vector().normalized() {
            Ok(axis) => axis,
            Err(Error::DivisionByZero) => self.axis,
            Err(err) => return Err(err),
        };
        let angle = 2.0 * quat.vector().length().atan2(quat.w());
        Ok(Rotation { axis, angle, quat })
    }

    /// Rotates `point` with the sandwich product `q * p * conj(q)`.
    pub fn rotate(&self, point: Vec3) -> Result<Vec3> {
        let p = Quat::pure(point)?;
        // q is unit, so its conjugate is its inverse
        let rotated = (self.quat * p * self.quat.conjugate()).validated()?;

        let residual = rotated.w().abs();
        let bound = SCALAR_RESIDUAL * point.length().max(1.0);
        if residual > bound {
            warn!("rotating {point} by {} left a scalar part of {residual:e}", self.quat);
        }
        debug_assert!(residual <= bound, "rotation quaternion {} is not a unit quaternion", self.quat);

        Ok(rotated.vector())
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::identity()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad about {}", self.angle, self.axis)
    }
}

/// Rotates `vector` by `angle` radians about `axis`.
///
/// The axis does not need to be unit length. Fails with `InvalidAxis` when it
/// is the zero vector, whatever the other arguments are.
pub fn rotate(vector: Vec3, axis: Vec3, angle: f64) -> Result<Vec3> {
    Rotation::new(axis, angle)?.rotate(vector)
}
