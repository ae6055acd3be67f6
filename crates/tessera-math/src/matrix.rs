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

//! Defines the `Mat3` and `Mat4` types and associated operations.
//!
//! Both matrices are row-major and act on row vectors from the right (`v * m`).
//! Composition reads left to right: `v * (a * b)` applies `a`, then `b`.

use crate::error::{check_len, MathError, Result};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vec2, Vec3, Vec4};
use std::ops::{Index, IndexMut, Mul};

// --- Mat3 ---

/// A 3x3 row-major matrix, used for 2D affine transformations of homogeneous `Vec2` points.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat3 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec3::ZERO; 3],
    };

    /// Creates a matrix from its nine elements, given row by row (`m11, m12, ... m33`).
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m11: Scalar,
        m12: Scalar,
        m13: Scalar,
        m21: Scalar,
        m22: Scalar,
        m23: Scalar,
        m31: Scalar,
        m32: Scalar,
        m33: Scalar,
    ) -> Self {
        Self {
            rows: [
                Vec3::new(m11, m12, m13),
                Vec3::new(m21, m22, m23),
                Vec3::new(m31, m32, m33),
            ],
        }
    }

    /// Creates a new matrix from three row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a matrix from a row-major slice that must hold exactly 9 elements.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(9, values.len())?;
        Ok(Self::from_rows(
            Vec3::new(values[0], values[1], values[2]),
            Vec3::new(values[3], values[4], values[5]),
            Vec3::new(values[6], values[7], values[8]),
        ))
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn to_array(&self) -> [Scalar; 9] {
        let [r0, r1, r2] = self.rows;
        [r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z]
    }

    /// Returns row `index` (0-based).
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn row(&self, index: usize) -> Vec3 {
        self.rows[index]
    }

    /// Returns column `index` (0-based).
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn col(&self, index: usize) -> Vec3 {
        Vec3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        )
    }

    /// Creates a 2D scaling matrix. The homogeneous coordinate is left untouched.
    #[inline]
    pub fn from_scale(scale: Vec2) -> Self {
        Self::new(scale.x, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a 2D translation matrix. The offset lives in the last row.
    #[inline]
    pub fn from_translation(offset: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, offset.x, offset.y, 1.0)
    }

    /// Creates a 2D rotation matrix.
    ///
    /// # Arguments
    ///
    /// * `angle_radians`: The angle of rotation in radians. Positive angles are counter-clockwise.
    #[inline]
    pub fn from_rotation(angle_radians: Scalar) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Returns the adjugate (transposed cofactor matrix).
    pub fn adjugate(&self) -> Self {
        let [r1, r2, r3] = self.rows;
        Self::new(
            r2.y * r3.z - r2.z * r3.y,
            r1.z * r3.y - r1.y * r3.z,
            r1.y * r2.z - r1.z * r2.y,
            r2.z * r3.x - r2.x * r3.z,
            r1.x * r3.z - r1.z * r3.x,
            r1.z * r2.x - r1.x * r2.z,
            r2.x * r3.y - r2.y * r3.x,
            r1.y * r3.x - r1.x * r3.y,
            r1.x * r2.y - r1.y * r2.x,
        )
    }

    /// Computes the determinant of the matrix.
    ///
    /// A determinant of 0 means the matrix is not invertible.
    #[inline]
    pub fn determinant(&self) -> Scalar {
        self.determinant_from(&self.adjugate())
    }

    /// Expands along the first row, reusing the first column of `adj`.
    #[inline]
    fn determinant_from(&self, adj: &Self) -> Scalar {
        self.rows[0].dot(adj.col(0))
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let adj = self.adjugate();
        let det = self.determinant_from(&adj);
        if det == 0.0 {
            log::debug!("refusing to invert singular Mat3 {:?}", self);
            return Err(MathError::SingularMatrix);
        }
        Ok(adj * (1.0 / det))
    }

    /// Performs a component-wise linear interpolation between two matrices.
    ///
    /// This does not preserve rotations; use [`Quaternion::slerp`] for that.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: Scalar) -> Self {
        Self::from_rows(
            Vec3::lerp(start.rows[0], end.rows[0], t),
            Vec3::lerp(start.rows[1], end.rows[1], t),
            Vec3::lerp(start.rows[2], end.rows[2], t),
        )
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Composes two matrices. `self` is applied first when transforming row vectors.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_rows(self.rows[0] * rhs, self.rows[1] * rhs, self.rows[2] * rhs)
    }
}

impl Mul<Scalar> for Mat3 {
    type Output = Self;
    /// Multiplies every element by a scalar.
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self::from_rows(self.rows[0] * rhs, self.rows[1] * rhs, self.rows[2] * rhs)
    }
}

impl Mul<Mat3> for Scalar {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Mat3> for Vec2 {
    type Output = Vec2;
    /// Transforms a 2D point (implicit `w = 1`) by the matrix.
    #[inline]
    fn mul(self, m: Mat3) -> Self::Output {
        let [r1, r2, r3] = m.rows;
        Vec2::new(
            self.x * r1.x + self.y * r2.x + r3.x,
            self.x * r1.y + self.y * r2.y + r3.y,
        )
    }
}

impl Mul<Mat3> for Vec3 {
    type Output = Vec3;
    /// Multiplies the row vector by the matrix.
    #[inline]
    fn mul(self, m: Mat3) -> Self::Output {
        let [r1, r2, r3] = m.rows;
        r1 * self.x + r2 * self.y + r3 * self.z
    }
}

impl Mul<Vec2> for Mat3 {
    type Output = Vec2;
    /// Same as `v * self`.
    #[inline]
    fn mul(self, v: Vec2) -> Self::Output {
        v * self
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Same as `v * self`.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        v * self
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl From<[Scalar; 9]> for Mat3 {
    #[inline]
    fn from(v: [Scalar; 9]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8])
    }
}

impl From<Mat3> for [Scalar; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_array()
    }
}

// --- Mat4 ---

/// A 4x4 row-major matrix, used for 3D affine transformations and projections.
///
/// Translations live in the last row, so a point `p` is moved by `p * m`.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO; 4],
    };

    /// Creates a matrix from its sixteen elements, given row by row (`m11, m12, ... m44`).
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m11: Scalar,
        m12: Scalar,
        m13: Scalar,
        m14: Scalar,
        m21: Scalar,
        m22: Scalar,
        m23: Scalar,
        m24: Scalar,
        m31: Scalar,
        m32: Scalar,
        m33: Scalar,
        m34: Scalar,
        m41: Scalar,
        m42: Scalar,
        m43: Scalar,
        m44: Scalar,
    ) -> Self {
        Self {
            rows: [
                Vec4::new(m11, m12, m13, m14),
                Vec4::new(m21, m22, m23, m24),
                Vec4::new(m31, m32, m33, m34),
                Vec4::new(m41, m42, m43, m44),
            ],
        }
    }

    /// Creates a new matrix from four row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Creates a matrix from a row-major slice that must hold exactly 16 elements.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(16, values.len())?;
        let row = |i: usize| {
            Vec4::new(
                values[i * 4],
                values[i * 4 + 1],
                values[i * 4 + 2],
                values[i * 4 + 3],
            )
        };
        Ok(Self::from_rows(row(0), row(1), row(2), row(3)))
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn to_array(&self) -> [Scalar; 16] {
        let mut out = [0.0; 16];
        for (chunk, row) in out.chunks_exact_mut(4).zip(self.rows.iter()) {
            chunk.copy_from_slice(&row.to_array());
        }
        out
    }

    /// Returns row `index` (0-based).
    ///
    /// # Panics
    /// Panics if `index` is greater than 3.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        self.rows[index]
    }

    /// Returns column `index` (0-based).
    ///
    /// # Panics
    /// Panics if `index` is greater than 3.
    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_rows(Vec4::X, Vec4::Y, Vec4::Z, Vec4::from_vec3(v, 1.0))
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    /// Creates a rotation matrix from an axis-angle vector (`xyz` axis, `w` angle in radians).
    ///
    /// The axis is used as given and should be normalized by the caller.
    #[inline]
    pub fn from_axis_angle(axis_angle: Vec4) -> Self {
        Self::from_quat(Quaternion::from_axis_angle(axis_angle))
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion is expected to be normalized.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let (x2, y2, z2) = (x * x, y * y, z * z);

        Self::from_rows(
            Vec4::new(
                1.0 - 2.0 * (y2 + z2),
                2.0 * (x * y + z * w),
                2.0 * (x * z - y * w),
                0.0,
            ),
            Vec4::new(
                2.0 * (x * y - z * w),
                1.0 - 2.0 * (x2 + z2),
                2.0 * (y * z + x * w),
                0.0,
            ),
            Vec4::new(
                2.0 * (x * z + y * w),
                2.0 * (y * z - x * w),
                1.0 - 2.0 * (x2 + y2),
                0.0,
            ),
            Vec4::W,
        )
    }

    /// Creates a perspective projection matrix mapping view depth `[-near, -far]` to `[-1, 1]`.
    ///
    /// # Arguments
    ///
    /// * `fov_y_radians`: Vertical field of view in radians.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `z_near`: Distance to the near clipping plane.
    /// * `z_far`: Distance to the far clipping plane (must be > `z_near`).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] unless `z_far > z_near`, `fov_y_radians > 0`
    /// and `aspect_ratio > 0`. NaN inputs are rejected.
    pub fn perspective(
        fov_y_radians: Scalar,
        aspect_ratio: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Result<Self> {
        let dz = z_far - z_near;
        if dz.is_nan() || dz <= 0.0 {
            return Err(reject_frustum("far plane must lie beyond the near plane"));
        }
        if fov_y_radians.is_nan() || fov_y_radians <= 0.0 {
            return Err(reject_frustum("field of view must be positive"));
        }
        if aspect_ratio.is_nan() || aspect_ratio <= 0.0 {
            return Err(reject_frustum("aspect ratio must be positive"));
        }

        let (sin, cos) = (fov_y_radians / 2.0).sin_cos();
        let cot = cos / sin;

        Ok(Self::from_rows(
            Vec4::new(cot / aspect_ratio, 0.0, 0.0, 0.0),
            Vec4::new(0.0, cot, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(z_far + z_near) / dz, -1.0),
            Vec4::new(0.0, 0.0, -2.0 * z_near * z_far / dz, 0.0),
        ))
    }

    /// Like [`Mat4::perspective`], from a horizontal field of view and an aspect ratio.
    #[inline]
    pub fn perspective_fovx(
        fov_x_radians: Scalar,
        aspect_ratio: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Result<Self> {
        Self::perspective(fov_x_radians / aspect_ratio, aspect_ratio, z_near, z_far)
    }

    /// Like [`Mat4::perspective`], from both fields of view. The aspect ratio is `fov_x / fov_y`.
    #[inline]
    pub fn perspective_fov_xy(
        fov_x_radians: Scalar,
        fov_y_radians: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Result<Self> {
        Self::perspective(
            fov_y_radians,
            fov_x_radians / fov_y_radians,
            z_near,
            z_far,
        )
    }

    /// Creates an orthographic projection matrix mapping the box to `[-1, 1]` on every axis.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidFrustum`] if any pair of opposite planes coincide
    /// or any plane is NaN.
    pub fn orthographic(
        top: Scalar,
        right: Scalar,
        bottom: Scalar,
        left: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Result<Self> {
        let dx = right - left;
        let dy = top - bottom;
        let dz = z_far - z_near;
        if [dx, dy, dz].iter().any(|d| *d == 0.0 || d.is_nan()) {
            return Err(reject_frustum("opposite planes must not coincide"));
        }

        Ok(Self::from_rows(
            Vec4::new(2.0 / dx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / dy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / dz, 0.0),
            Vec4::new(
                -(right + left) / dx,
                -(top + bottom) / dy,
                -(z_far + z_near) / dz,
                1.0,
            ),
        ))
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Returns the adjugate (transposed cofactor matrix).
    ///
    /// Each cofactor is assembled from shared 2x2 sub-determinants of the top
    /// and bottom row pairs.
    pub fn adjugate(&self) -> Self {
        let [a, b, c, d] = self.rows;

        let s0 = a.x * b.y - b.x * a.y;
        let s1 = a.x * b.z - b.x * a.z;
        let s2 = a.x * b.w - b.x * a.w;
        let s3 = a.y * b.z - b.y * a.z;
        let s4 = a.y * b.w - b.y * a.w;
        let s5 = a.z * b.w - b.z * a.w;

        let c5 = c.z * d.w - d.z * c.w;
        let c4 = c.y * d.w - d.y * c.w;
        let c3 = c.y * d.z - d.y * c.z;
        let c2 = c.x * d.w - d.x * c.w;
        let c1 = c.x * d.z - d.x * c.z;
        let c0 = c.x * d.y - d.x * c.y;

        Self::new(
            b.y * c5 - b.z * c4 + b.w * c3,
            -a.y * c5 + a.z * c4 - a.w * c3,
            d.y * s5 - d.z * s4 + d.w * s3,
            -c.y * s5 + c.z * s4 - c.w * s3,
            -b.x * c5 + b.z * c2 - b.w * c1,
            a.x * c5 - a.z * c2 + a.w * c1,
            -d.x * s5 + d.z * s2 - d.w * s1,
            c.x * s5 - c.z * s2 + c.w * s1,
            b.x * c4 - b.y * c2 + b.w * c0,
            -a.x * c4 + a.y * c2 - a.w * c0,
            d.x * s4 - d.y * s2 + d.w * s0,
            -c.x * s4 + c.y * s2 - c.w * s0,
            -b.x * c3 + b.y * c1 - b.z * c0,
            a.x * c3 - a.y * c1 + a.z * c0,
            -d.x * s3 + d.y * s1 - d.z * s0,
            c.x * s3 - c.y * s1 + c.z * s0,
        )
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> Scalar {
        self.determinant_from(&self.adjugate())
    }

    /// Expands along the first row, reusing the first column of `adj`.
    #[inline]
    fn determinant_from(&self, adj: &Self) -> Scalar {
        self.rows[0].dot(adj.col(0))
    }

    /// Computes the inverse of the matrix. The adjugate is computed only once.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let adj = self.adjugate();
        let det = self.determinant_from(&adj);
        if det == 0.0 {
            log::debug!("refusing to invert singular Mat4 {:?}", self);
            return Err(MathError::SingularMatrix);
        }
        Ok(adj * (1.0 / det))
    }

    /// Performs a component-wise linear interpolation between two matrices.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: Scalar) -> Self {
        Self::from_rows(
            Vec4::lerp(start.rows[0], end.rows[0], t),
            Vec4::lerp(start.rows[1], end.rows[1], t),
            Vec4::lerp(start.rows[2], end.rows[2], t),
            Vec4::lerp(start.rows[3], end.rows[3], t),
        )
    }
}

fn reject_frustum(reason: &'static str) -> MathError {
    log::debug!("rejecting projection parameters: {reason}");
    MathError::InvalidFrustum(reason)
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Composes two matrices. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut rows = [Vec4::ZERO; 4];
        for (target, row) in rows.iter_mut().zip(self.rows.iter()) {
            *target = *row * rhs;
        }
        Mat4 { rows }
    }
}

impl Mul<Scalar> for Mat4 {
    type Output = Self;
    /// Multiplies every element by a scalar.
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

impl Mul<Mat4> for Scalar {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}

impl Mul<Mat4> for Vec3 {
    type Output = Vec3;
    /// Transforms a 3D point (implicit `w = 1`) by the matrix, without perspective divide.
    #[inline]
    fn mul(self, m: Mat4) -> Self::Output {
        let [r1, r2, r3, r4] = m.rows;
        r1.xyz() * self.x + r2.xyz() * self.y + r3.xyz() * self.z + r4.xyz()
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    /// Multiplies the row vector by the matrix.
    #[inline]
    fn mul(self, m: Mat4) -> Self::Output {
        let [r1, r2, r3, r4] = m.rows;
        r1 * self.x + r2 * self.y + r3 * self.z + r4 * self.w
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    /// Same as `v * self`.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        v * self
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Same as `v * self`.
    #[inline]
    fn mul(self, v: Vec4) -> Self::Output {
        v * self
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl From<[Scalar; 16]> for Mat4 {
    #[inline]
    fn from(v: [Scalar; 16]) -> Self {
        Self::from_rows(
            Vec4::new(v[0], v[1], v[2], v[3]),
            Vec4::new(v[4], v[5], v[6], v[7]),
            Vec4::new(v[8], v[9], v[10], v[11]),
            Vec4::new(v[12], v[13], v[14], v[15]),
        )
    }
}

impl From<Mat4> for [Scalar; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.to_array()
    }
}

// --- Tests ---
