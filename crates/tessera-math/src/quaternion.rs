// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

use crate::error::{check_len, Result};
use crate::matrix::Mat4;
use crate::scalar::{approx_eq, Scalar, TWO_PI};
use crate::vector::{skips_normalization, Vec3, Vec4};
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion for 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" part. For representing rotations, it should be a "unit
/// quaternion" where `x² + y² + z² + w² = 1`. Constructors do not normalize.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: Scalar,
    /// The y component of the vector part.
    pub y: Scalar,
    /// The z component of the vector part.
    pub z: Scalar,
    /// The scalar (real) part.
    pub w: Scalar,
}

impl Quaternion {
    /// The quaternion with every component set to zero. It does not represent a rotation.
    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);

    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from an axis-angle vector.
    ///
    /// # Arguments
    ///
    /// * `axis_angle`: `xyz` is the axis of rotation, `w` the angle in radians.
    ///   The axis is used as given, so pass a normalized one to get a unit quaternion.
    #[inline]
    pub fn from_axis_angle(axis_angle: Vec4) -> Self {
        let (s, c) = (axis_angle.w * 0.5).sin_cos();
        let v = axis_angle.xyz() * s;
        Self::new(v.x, v.y, v.z, c)
    }

    /// Creates a quaternion from Euler angles in radians.
    ///
    /// `pitch` turns around the Y-axis, `yaw` around the Z-axis and `roll` around the X-axis.
    /// This is the inverse of [`Quaternion::to_pitch_yaw_roll`] for pitches inside `[-π/2, π/2]`.
    pub fn from_euler(pitch: Scalar, yaw: Scalar, roll: Scalar) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();

        Self::new(
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
            cy * cr * cp + sy * sr * sp,
        )
    }

    /// Creates a quaternion from the rotation part of a 4x4 matrix.
    ///
    /// Only the upper 3x3 block is read. The matrix is expected to be a pure rotation
    /// built for row vectors, as [`Mat4::from_quat`] produces.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        // Row vectors: the column-vector rotation is the transpose.
        let r = |i: usize, j: usize| m.rows[j][i];
        let (m00, m11, m22) = (r(0, 0), r(1, 1), r(2, 2));

        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (r(2, 1) - r(1, 2)) / s;
            q.y = (r(0, 2) - r(2, 0)) / s;
            q.z = (r(1, 0) - r(0, 1)) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (r(2, 1) - r(1, 2)) / s;
            q.x = 0.25 * s;
            q.y = (r(0, 1) + r(1, 0)) / s;
            q.z = (r(0, 2) + r(2, 0)) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (r(0, 2) - r(2, 0)) / s;
            q.x = (r(0, 1) + r(1, 0)) / s;
            q.y = 0.25 * s;
            q.z = (r(1, 2) + r(2, 1)) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (r(1, 0) - r(0, 1)) / s;
            q.x = (r(0, 2) + r(2, 0)) / s;
            q.y = (r(1, 2) + r(2, 1)) / s;
            q.z = 0.25 * s;
        }
        q.normalize()
    }

    /// Creates a quaternion from a slice that must hold exactly 4 elements `[x, y, z, w]`.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(4, values.len())?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Overwrites the vector part, keeping `w`.
    #[inline]
    pub fn set_xyz(&mut self, v: Vec3) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> Scalar {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> Scalar {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    ///
    /// Quaternions whose squared magnitude is already ~0 or ~1 are returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if skips_normalization(mag_sq) {
            *self
        } else {
            *self / mag_sq.sqrt()
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Computes the inverse rotation.
    ///
    /// This is the conjugate, which is only the true inverse for unit quaternions.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotation around the Y-axis, in radians, within `[-π/2, π/2]`.
    #[inline]
    pub fn pitch(&self) -> Scalar {
        (2.0 * (self.w * self.y - self.z * self.x))
            .clamp(-1.0, 1.0)
            .asin()
    }

    /// Rotation around the Z-axis, in radians.
    #[inline]
    pub fn yaw(&self) -> Scalar {
        (2.0 * (self.w * self.z + self.x * self.y))
            .atan2(1.0 - 2.0 * (self.y * self.y + self.z * self.z))
    }

    /// Rotation around the X-axis, in radians.
    #[inline]
    pub fn roll(&self) -> Scalar {
        (2.0 * (self.w * self.x + self.y * self.z))
            .atan2(1.0 - 2.0 * (self.x * self.x + self.y * self.y))
    }

    /// Returns `(pitch, yaw, roll)` in radians.
    #[inline]
    pub fn to_pitch_yaw_roll(&self) -> (Scalar, Scalar, Scalar) {
        (self.pitch(), self.yaw(), self.roll())
    }

    /// Converts the quaternion to an axis-angle vector (`xyz` axis, `w` angle in radians).
    ///
    /// When the vector part has no usable length the rotation has no defined axis and
    /// `Vec4::Z` (Z-axis, zero angle) is returned.
    pub fn to_axis_angle(&self) -> Vec4 {
        let v = self.xyz();
        let scale = v.length();
        if approx_eq(scale, 0.0) || approx_eq(scale, TWO_PI) {
            return Vec4::Z;
        }
        Vec4::from_vec3(v / scale, 2.0 * self.w.clamp(-1.0, 1.0).acos())
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// The path is not corrected towards the shorter arc and `t` is not clamped.
    /// When both inputs are (nearly) identical this falls back to a normalized
    /// linear interpolation. Unit inputs always produce a unit result, including
    /// nearly opposite ones.
    pub fn slerp(start: Self, end: Self, t: Scalar) -> Self {
        let dot = start.dot(end).clamp(-1.0, 1.0);

        if approx_eq(dot, 1.0) {
            return (start + (end - start) * t).normalize();
        }

        let theta = dot.acos() * t;
        let perpendicular = end - start * dot;
        let length = perpendicular.magnitude();
        let relative = if length > 0.0 {
            perpendicular / length
        } else {
            // Exactly opposite: every great circle through `start` reaches `end`.
            Self::new(-start.y, start.x, -start.w, start.z)
        };
        start * theta.cos() + relative * theta.sin()
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Quaternion> for Vec3 {
    type Output = Vec3;
    /// Rotates the vector by `q`. The quaternion is not normalized first.
    #[inline]
    fn mul(self, q: Quaternion) -> Self::Output {
        let u = q.xyz();
        let uv = u.cross(self);
        let uuv = u.cross(uv);
        self + uv * (2.0 * q.w) + uuv * 2.0
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Same as `v * self`.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<Scalar> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: Scalar) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Div<Scalar> for Quaternion {
    type Output = Self;
    /// Divides all components of the quaternion by a scalar.
    #[inline]
    fn div(self, scalar: Scalar) -> Self::Output {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            w: self.w / scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result represents the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl From<[Scalar; 4]> for Quaternion {
    #[inline]
    fn from(v: [Scalar; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Quaternion> for [Scalar; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::scalar::{EPSILON, HALF_PI, PI, QUARTER_PI};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn quat_approx_eq(q1: Quaternion, q2: Quaternion) -> bool {
        let dot = q1.dot(q2).abs();
        approx::relative_eq!(dot, 1.0, epsilon = EPSILON * 10.0) // Use abs dot product
    }

    fn about_z(angle: Scalar) -> Quaternion {
        Quaternion::from_axis_angle(Vec4::from_vec3(Vec3::Z, angle))
    }

    #[test]
    fn test_identity_and_default() {
        let q_ident = Quaternion::IDENTITY;
        assert_eq!(q_ident, Quaternion::default());
        assert_eq!(q_ident.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_relative_eq!(q_ident.magnitude(), 1.0, epsilon = EPSILON);
        assert_eq!(Quaternion::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_from_axis_angle() {
        let angle = HALF_PI;
        let q = Quaternion::from_axis_angle(Vec4::new(0.0, 1.0, 0.0, angle));

        let (s, c) = (angle * 0.5).sin_cos();
        assert_relative_eq!(q, Quaternion::new(0.0, s, 0.0, c), epsilon = EPSILON);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_axis_angle_keeps_axis_length() {
        let q = Quaternion::from_axis_angle(Vec4::new(0.0, 5.0, 0.0, HALF_PI));
        assert_relative_eq!(q.y, 5.0 * QUARTER_PI.sin(), epsilon = EPSILON);
        assert!(q.magnitude() > 1.0);
    }

    #[test]
    fn test_to_axis_angle() {
        let axis_angle = Vec4::from_vec3(Vec3::new(1.0, 2.0, 2.0).normalize(), 1.2);
        let q = Quaternion::from_axis_angle(axis_angle);
        assert_relative_eq!(q.to_axis_angle(), axis_angle, epsilon = EPSILON);

        // No rotation means no axis.
        assert_eq!(Quaternion::IDENTITY.to_axis_angle(), Vec4::Z);
    }

    #[test]
    fn test_euler_round_trip() {
        let (pitch, yaw, roll) = (0.3, 0.5, -0.2);
        let q = Quaternion::from_euler(pitch, yaw, roll);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);

        let (p, y, r) = q.to_pitch_yaw_roll();
        assert_relative_eq!(p, pitch, epsilon = EPSILON);
        assert_relative_eq!(y, yaw, epsilon = EPSILON);
        assert_relative_eq!(r, roll, epsilon = EPSILON);
    }

    #[test]
    fn test_euler_axes() {
        let yaw_only = Quaternion::from_euler(0.0, 1.0, 0.0);
        assert!(quat_approx_eq(yaw_only, about_z(1.0)));

        let pitch_only = Quaternion::from_euler(0.4, 0.0, 0.0);
        let about_y = Quaternion::from_axis_angle(Vec4::new(0.0, 1.0, 0.0, 0.4));
        assert!(quat_approx_eq(pitch_only, about_y));

        let roll_only = Quaternion::from_euler(0.0, 0.0, 0.7);
        let about_x = Quaternion::from_axis_angle(Vec4::new(1.0, 0.0, 0.0, 0.7));
        assert!(quat_approx_eq(roll_only, about_x));

        assert_eq!(Quaternion::from_euler(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_pitch_clamps_at_gimbal_lock() {
        let q = Quaternion::from_euler(HALF_PI, 0.0, 0.0);
        assert_relative_eq!(q.pitch(), HALF_PI, epsilon = 1e-3);
        assert!(!q.pitch().is_nan());
    }

    #[test]
    fn test_from_rotation_matrix_identity() {
        let m = Mat4::IDENTITY;
        let q = Quaternion::from_rotation_matrix(&m);
        assert!(quat_approx_eq(q, Quaternion::IDENTITY));
    }

    #[test]
    fn test_from_rotation_matrix_simple_rotations() {
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let expected = Quaternion::from_axis_angle(Vec4::from_vec3(axis, QUARTER_PI));
            let m = Mat4::from_axis_angle(Vec4::from_vec3(axis, QUARTER_PI));
            assert!(quat_approx_eq(Quaternion::from_rotation_matrix(&m), expected));
        }
    }

    #[test]
    fn test_matrix_to_quat_and_back() {
        // Angles chosen to hit every branch of the trace extraction.
        for angle in [0.4, 1.85, PI - 0.1, PI] {
            let axis = Vec3::new(-1.0, 2.5, 0.7).normalize();
            let q_orig = Quaternion::from_axis_angle(Vec4::from_vec3(axis, angle));
            let q_back = Quaternion::from_rotation_matrix(&Mat4::from_quat(q_orig));
            assert!(quat_approx_eq(q_orig, q_back), "angle {angle}");
        }
    }

    #[test]
    fn test_conjugate_and_inverse() {
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(q.inverse(), q.conjugate());
        assert_eq!(-q, Quaternion::new(-1.0, 2.0, -3.0, -4.0));

        let unit = about_z(0.8);
        assert_relative_eq!(unit * unit.inverse(), Quaternion::IDENTITY, epsilon = EPSILON);
    }

    #[test]
    fn test_multiplication_identity() {
        let q = about_z(0.6);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_multiplication_composition() {
        let mut q = about_z(0.25);
        q *= about_z(0.5);
        assert_relative_eq!(q, about_z(0.75), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_vec3() {
        let q = Quaternion::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, PI));
        assert_abs_diff_eq!(q * Vec3::X, -Vec3::X, epsilon = EPSILON);
        assert_abs_diff_eq!(Vec3::X * q, -Vec3::X, epsilon = EPSILON);

        let q = about_z(HALF_PI);
        assert_abs_diff_eq!(q * Vec3::X, Vec3::Y, epsilon = EPSILON);
        assert_abs_diff_eq!(q * Vec3::Z, Vec3::Z, epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_agrees_with_matrix() {
        let q = Quaternion::from_euler(0.3, -1.1, 0.9);
        let m = Mat4::from_quat(q);
        let v = Vec3::new(0.5, -2.0, 3.0);
        assert_abs_diff_eq!(q * v, v * m, epsilon = EPSILON);
    }

    #[test]
    fn test_normalization() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 2.0).normalize();
        assert_eq!(q, Quaternion::IDENTITY);

        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);

        assert_eq!(Quaternion::ZERO.normalize(), Quaternion::ZERO);
    }

    #[test]
    fn test_xyz_accessors() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.xyz(), Vec3::new(1.0, 2.0, 3.0));
        q.set_xyz(Vec3::ZERO);
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn test_scalar_ops() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(q / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(q + q - q, q);
        assert_relative_eq!(q.dot(q), 30.0);
    }

    #[test]
    fn test_slerp_endpoints() {
        let start = about_z(0.0);
        let end = about_z(HALF_PI);
        assert_relative_eq!(Quaternion::slerp(start, end, 0.0), start, epsilon = EPSILON);
        assert_relative_eq!(Quaternion::slerp(start, end, 1.0), end, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_midpoint() {
        let mid = Quaternion::slerp(about_z(0.0), about_z(HALF_PI), 0.5);
        assert_relative_eq!(mid, about_z(QUARTER_PI), epsilon = EPSILON);
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_identical_quaternions() {
        let q = Quaternion::from_euler(0.2, 0.4, 0.6);
        for t in [0.0, 0.3, 1.0, 2.5] {
            assert_relative_eq!(Quaternion::slerp(q, q, t), q, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_slerp_nearly_opposite_stays_unit() {
        let start = Quaternion::IDENTITY;
        let end = about_z(TWO_PI - 0.0126);
        assert!(start.dot(end) < -0.9999);

        for t in [0.25, 0.5, 0.75] {
            let q = Quaternion::slerp(start, end, t);
            assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
        }
        assert_relative_eq!(Quaternion::slerp(start, end, 1.0), end, epsilon = EPSILON);

        let mid = Quaternion::slerp(start, -start, 0.5);
        assert_relative_eq!(mid.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(mid.dot(start), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Quaternion::slerp(start, -start, 1.0), -start, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_does_not_clamp_t() {
        let q = Quaternion::slerp(about_z(0.0), about_z(0.5), 2.0);
        assert_relative_eq!(q, about_z(1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_from_slice() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::from_slice(&q.to_array()), Ok(q));
        assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), q);
        assert_eq!(
            Quaternion::from_slice(&[1.0, 2.0, 3.0]),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }
}
