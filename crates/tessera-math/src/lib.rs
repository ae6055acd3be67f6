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

//! # Tessera Math
//!
//! Small linear-algebra primitives for graphics, geometry and transform pipelines:
//! 2D/3D/4D vectors, 3x3/4x4 matrices and quaternions.
//!
//! ## Conventions
//!
//! * Matrices are stored row-major (`rows[i]` is row `i`, so `m_ij` lives at
//!   `rows[i - 1][j - 1]`).
//! * Vectors are **row vectors** and are transformed by right-multiplication:
//!   `v * m`. A product `a * b` applies `a` first, so `v * (a * b) == (v * a) * b`.
//! * Positive angles rotate counter-clockwise in a right-handed frame.
//! * All angular functions operate in **radians**.
//!
//! ```
//! use tessera_math::{Mat4, Quaternion, Vec3, Vec4, HALF_PI};
//!
//! let spin = Quaternion::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, HALF_PI));
//! let m = Mat4::from_quat(spin) * Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0));
//! let p = Vec3::X * m;
//! assert!(p.approx_eq(&Vec3::new(0.0, 1.0, 5.0)));
//! ```
//!
//! Every type is a plain `Copy` value. Nothing here allocates, blocks or shares
//! mutable state, so all operations can be called freely from any thread.

#![warn(missing_docs)]

// --- Declare Sub-Modules ---

mod approx_impls;
pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::{MathError, Result};
pub use self::matrix::{Mat3, Mat4};
pub use self::quaternion::Quaternion;
pub use self::scalar::{
    approx_eq, approx_eq_eps, degrees_to_radians, radians_to_degrees, Scalar, DEGREES_PER_RADIAN,
    EPSILON, HALF_PI, PI, QUARTER_PI, RADIANS_PER_DEGREE, TWO_PI,
};
pub use self::vector::{Vec2, Vec3, Vec4};
