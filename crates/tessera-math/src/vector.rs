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

//! Provides 2D, 3D, and 4D vector types and their associated operations.
//!
//! Transformation by matrices lives in [`crate::matrix`] and rotation by
//! quaternions in [`crate::quaternion`].

use crate::error::{check_len, Result};
use crate::scalar::{approx_eq, Scalar};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Returns `true` when a squared length is already ~0 or ~1, in which case
/// normalization leaves the value untouched.
#[inline]
pub(crate) fn skips_normalization(length_squared: Scalar) -> bool {
    approx_eq(length_squared, 0.0) || approx_eq(length_squared, 1.0)
}

// --- Vec2 ---

/// A 2-dimensional vector with `f32` components.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: Scalar,
    /// The y component of the vector.
    pub y: Scalar,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Creates a vector from a slice that must hold exactly 2 elements.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(2, values.len())?;
        Ok(Self::new(values[0], values[1]))
    }

    /// Returns the components as `[x, y]`.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 2] {
        [self.x, self.y]
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> Scalar {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Vectors whose squared length is already within [`EPSILON`](crate::EPSILON)
    /// of 0 or 1 are returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if skips_normalization(len_sq) {
            *self
        } else {
            *self / len_sq.sqrt()
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> Scalar {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The z component of the 3D cross product of both vectors lifted into the xy-plane.
    #[inline]
    pub fn cross(&self, rhs: Self) -> Scalar {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotates the vector around the origin.
    #[inline]
    pub fn rotate(&self, radians: Scalar) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    /// Rotates the vector around an arbitrary pivot point.
    #[inline]
    pub fn rotate_around(&self, radians: Scalar, pivot: Self) -> Self {
        (*self - pivot).rotate(radians) + pivot
    }

    /// Returns the signed angle from this vector to `other`, in `(-π, π]`.
    ///
    /// Returns `0.0` when both vectors are exactly equal.
    pub fn angle(&self, other: Self) -> Scalar {
        if *self == other {
            return 0.0;
        }

        let a = self.normalize();
        let b = other.normalize();
        let dot = a.dot(b).clamp(-1.0, 1.0);
        a.cross(b).atan2(dot)
    }

    /// Performs a linear interpolation between two vectors.
    /// `t` is not clamped: values outside `[0.0, 1.0]` extrapolate.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: Scalar) -> Self {
        start + (end - start) * t
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<Scalar> for Vec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for Scalar {
    type Output = Vec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl Div<Scalar> for Vec2 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = Scalar;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl From<[Scalar; 2]> for Vec2 {
    #[inline]
    fn from(value: [Scalar; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Vec2> for [Scalar; 2] {
    #[inline]
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

// --- Vec3 ---

/// A 3-dimensional vector with `f32` components.
#[derive(Debug, Default, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: Scalar,
    /// The y component of the vector.
    pub y: Scalar,
    /// The z component of the vector.
    pub z: Scalar,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from a slice that must hold exactly 3 elements.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(3, values.len())?;
        Ok(Self::new(values[0], values[1], values[2]))
    }

    /// Returns the components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 3] {
        [self.x, self.y, self.z]
    }

    /// The `(x, y)` projection.
    #[inline]
    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The `(x, z)` projection.
    #[inline]
    pub const fn xz(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// The `(y, z)` projection.
    #[inline]
    pub const fn yz(&self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    /// Overwrites `x` and `y`.
    #[inline]
    pub fn set_xy(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Overwrites `x` and `z` with `v.x` and `v.y`.
    #[inline]
    pub fn set_xz(&mut self, v: Vec2) {
        self.x = v.x;
        self.z = v.y;
    }

    /// Overwrites `y` and `z` with `v.x` and `v.y`.
    #[inline]
    pub fn set_yz(&mut self, v: Vec2) {
        self.y = v.x;
        self.z = v.y;
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> Scalar {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    /// Zero-length and unit-length vectors are returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if skips_normalization(len_sq) {
            *self
        } else {
            *self / len_sq.sqrt()
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Performs a linear interpolation between two vectors.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: Scalar) -> Self {
        start + (end - start) * t
    }
}

// --- Operator Overloads ---

impl Add for Vec3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<Scalar> for Vec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vec3> for Scalar {
    type Output = Vec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<Scalar> for Vec3 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Div<Vec3> for Vec3 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = Scalar;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl From<[Scalar; 3]> for Vec3 {
    #[inline]
    fn from(value: [Scalar; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [Scalar; 3] {
    #[inline]
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

// --- Vec4 ---

/// A 4-dimensional vector with `f32` components, often used for homogeneous coordinates.
///
/// Points conventionally carry `w = 1.0` and directions `w = 0.0`. A `Vec4` is also
/// the axis-angle form taken by [`crate::Quaternion::from_axis_angle`]: `xyz` is the
/// axis and `w` the angle in radians.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec4 {
    /// The x component of the vector.
    pub x: Scalar,
    /// The y component of the vector.
    pub y: Scalar,
    /// The z component of the vector.
    pub z: Scalar,
    /// The w component, used for homogeneous coordinates.
    pub w: Scalar,
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive W-axis.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a `Vec4` from a `Vec3` and a `w` component.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: Scalar) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates a vector from a slice that must hold exactly 4 elements.
    pub fn from_slice(values: &[Scalar]) -> Result<Self> {
        check_len(4, values.len())?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The `(x, y, z)` projection, discarding `w`.
    #[inline]
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The `(x, y)` projection.
    #[inline]
    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The `(x, z)` projection.
    #[inline]
    pub const fn xz(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// The `(y, z)` projection.
    #[inline]
    pub const fn yz(&self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    /// Overwrites `x`, `y` and `z`, keeping `w`.
    #[inline]
    pub fn set_xyz(&mut self, v: Vec3) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }

    /// Overwrites `x` and `y`.
    #[inline]
    pub fn set_xy(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Overwrites `x` and `z` with `v.x` and `v.y`.
    #[inline]
    pub fn set_xz(&mut self, v: Vec2) {
        self.x = v.x;
        self.z = v.y;
    }

    /// Overwrites `y` and `z` with `v.x` and `v.y`.
    #[inline]
    pub fn set_yz(&mut self, v: Vec2) {
        self.y = v.x;
        self.z = v.y;
    }

    /// Projects a homogeneous point back to 3D by dividing through `w`.
    ///
    /// When `w` is zero (a direction) the `xyz` projection is returned unchanged.
    /// Any nonzero `w`, however small, divides.
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        if self.w == 0.0 {
            self.xyz()
        } else {
            self.xyz() / self.w
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> Scalar {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    /// Zero-length and unit-length vectors are returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if skips_normalization(len_sq) {
            *self
        } else {
            *self / len_sq.sqrt()
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Performs a linear interpolation between two vectors.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: Scalar) -> Self {
        start + (end - start) * t
    }
}

// --- Operator Overloads ---

impl Add for Vec4 {
    type Output = Self;
    /// Adds two vectors component-wise.
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

impl Sub for Vec4 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
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

impl Mul<Scalar> for Vec4 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Mul<Vec4> for Scalar {
    type Output = Vec4;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec4> for Vec4 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }
}

impl Div<Scalar> for Vec4 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

impl Div<Vec4> for Vec4 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
            w: self.w / rhs.w,
        }
    }
}

impl Neg for Vec4 {
    type Output = Self;
    /// Negates the vector.
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

impl Index<usize> for Vec4 {
    type Output = Scalar;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

impl From<[Scalar; 4]> for Vec4 {
    #[inline]
    fn from(value: [Scalar; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vec4> for [Scalar; 4] {
    #[inline]
    fn from(value: Vec4) -> Self {
        value.to_array()
    }
}
