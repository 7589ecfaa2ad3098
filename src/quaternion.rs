//! Struct and functions for working with [`Quaternion`]s, the crate's core
//! value type.

use crate::errors::ZeroQuaternionError;
use crate::euler::EulerAngles;
use crate::float_types::{FRAC_PI_2, Real, tolerance};
use nalgebra::{Matrix3, Vector3};
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Sub};

/// A hypercomplex number `w + xi + yj + zk`, freely copyable plain data.
///
/// Nothing constrains the magnitude: arithmetic, [`conjugate`](Self::conjugate)
/// and the rotation conversions all accept non-unit quaternions. The rotation
/// conversions are only *physically* meaningful at unit norm; on non-unit
/// input they produce a scaled/skewed linear map instead of an element of
/// SO(3), and the crate does not renormalize on the caller's behalf. Callers
/// that need rotation semantics normalize first; [`is_unit`](Self::is_unit)
/// is the advisory check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: Real,
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Quaternion {
    /// Create a new [`Quaternion`] from its four components.
    pub const fn new(w: Real, x: Real, y: Real, z: Real) -> Self {
        Quaternion { w, x, y, z }
    }

    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Build a unit quaternion from three rotation angles in radians using
    /// the half-angle formula.
    ///
    /// The axis pairing is pitch → y, yaw → z, roll → x, and
    /// [`to_euler_angles`](Self::to_euler_angles) decomposes with the same
    /// pairing, so the two round-trip away from the gimbal-lock boundary.
    pub fn from_euler_angles(pitch: Real, yaw: Real, roll: Real) -> Self {
        let cy = (yaw * 0.5).cos();
        let sy = (yaw * 0.5).sin();
        let cr = (roll * 0.5).cos();
        let sr = (roll * 0.5).sin();
        let cp = (pitch * 0.5).cos();
        let sp = (pitch * 0.5).sin();

        Quaternion::new(
            cy * cr * cp + sy * sr * sp,
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
        )
    }

    /// Negate the vector part, keeping `w`.
    pub const fn conjugate(&self) -> Self {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Euclidean 2-norm of the four components, always ≥ 0.
    pub fn norm(&self) -> Real {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether the norm is 1 within the crate [`tolerance`].
    ///
    /// Advisory only: no operation enforces it.
    pub fn is_unit(&self) -> bool {
        (self.norm() - 1.0).abs() <= tolerance()
    }

    /// Return this quaternion scaled to unit norm.
    ///
    /// Fails with [`ZeroQuaternionError::Normalize`] when the norm is exactly
    /// zero; never returns a zero or NaN-filled quaternion.
    pub fn normalize(&self) -> Result<Self, ZeroQuaternionError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(ZeroQuaternionError::Normalize);
        }
        Ok(*self / n)
    }

    /// Scale to unit norm in place, returning the previous norm.
    ///
    /// Same zero-norm failure as [`normalize`](Self::normalize); the receiver
    /// is left untouched on error.
    pub fn normalize_mut(&mut self) -> Result<Real, ZeroQuaternionError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(ZeroQuaternionError::Normalize);
        }
        self.w /= n;
        self.x /= n;
        self.y /= n;
        self.z /= n;
        Ok(n)
    }

    /// The multiplicative inverse: the conjugate scaled by `1 / norm²`.
    ///
    /// `norm²` is derived from [`norm`](Self::norm) so the zero check has a
    /// single source of truth. Fails with [`ZeroQuaternionError::Inverse`]
    /// when the norm is exactly zero.
    pub fn inverse(&self) -> Result<Self, ZeroQuaternionError> {
        let n = self.norm();
        let norm_sq = n * n;
        if norm_sq == 0.0 {
            return Err(ZeroQuaternionError::Inverse);
        }
        Ok(self.conjugate() / norm_sq)
    }

    /// The closed-form quaternion-to-matrix conversion, Hamilton convention.
    ///
    /// Total: a non-unit operand produces a non-orthonormal matrix that
    /// scales by `norm²`; see the type-level docs.
    pub fn to_rotation_matrix(&self) -> Matrix3<Real> {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        Matrix3::new(
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y - 2.0 * z * w,
            2.0 * x * z + 2.0 * y * w,
            2.0 * x * y + 2.0 * z * w,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z - 2.0 * x * w,
            2.0 * x * z - 2.0 * y * w,
            2.0 * y * z + 2.0 * x * w,
            1.0 - 2.0 * x * x - 2.0 * y * y,
        )
    }

    /// Decompose into Euler angles with the same axis pairing as
    /// [`from_euler_angles`](Self::from_euler_angles).
    ///
    /// At the singularity `|sin(pitch)| >= 1` the pitch is clamped to ±π/2
    /// instead of handing `asin` an out-of-domain value.
    pub fn to_euler_angles(&self) -> EulerAngles {
        // Roll (x-axis rotation)
        let sinr_cosp = 2.0 * (self.w * self.x + self.y * self.z);
        let cosr_cosp = 1.0 - 2.0 * (self.x * self.x + self.y * self.y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        // Pitch (y-axis rotation), clamped at gimbal lock
        let sinp = 2.0 * (self.w * self.y - self.z * self.x);
        let pitch = if sinp.abs() >= 1.0 {
            FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        // Yaw (z-axis rotation)
        let siny_cosp = 2.0 * (self.w * self.z + self.x * self.y);
        let cosy_cosp = 1.0 - 2.0 * (self.y * self.y + self.z * self.z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        EulerAngles { pitch, yaw, roll }
    }

    /// Rotate a 3-component vector by conjugation: lift `v` to the pure
    /// quaternion `(0, vx, vy, vz)` and compute `q * v * q⁻¹`, returning the
    /// vector part.
    ///
    /// Inherits the zero-quaternion failure of [`inverse`](Self::inverse).
    /// At unit norm this agrees with applying
    /// [`to_rotation_matrix`](Self::to_rotation_matrix) to `v`; the two paths
    /// are computed independently and make a natural cross-check.
    pub fn rotate_vector(&self, v: &Vector3<Real>) -> Result<Vector3<Real>, ZeroQuaternionError> {
        let inverse = self.inverse()?;
        let lifted = Quaternion::new(0.0, v.x, v.y, v.z);

        let rotated = *self * lifted * inverse;
        Ok(Vector3::new(rotated.x, rotated.y, rotated.z))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        Quaternion::from_euler_angles(angles.pitch, angles.yaw, angles.roll)
    }
}

/// Componentwise addition over all four fields.
impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

/// Componentwise subtraction over all four fields.
impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

/// The Hamilton product. Non-commutative: `a * b != b * a` in general.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

/// Componentwise scaling.
impl Mul<Real> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self::Output {
        Quaternion::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Componentwise division by a scalar.
impl Div<Real> for Quaternion {
    type Output = Self;

    fn div(self, rhs: Real) -> Self::Output {
        Quaternion::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Renders as `(w, xi, yj, zk)`.
impl Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}i, {}j, {}k)", self.w, self.x, self.y, self.z)
    }
}

impl approx::AbsDiffEq for Quaternion {
    type Epsilon = <Real as approx::AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.w, &other.w, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.w, &other.w, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
