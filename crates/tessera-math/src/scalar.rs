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

//! The element type shared by every vector, matrix and quaternion, with its
//! derived constants and tolerance.

/// The floating-point element type of every value in this crate.
pub type Scalar = f32;

pub use std::f32::consts::PI;

/// Half of π (90 degrees).
pub const HALF_PI: Scalar = PI / 2.0;
/// A quarter of π (45 degrees).
pub const QUARTER_PI: Scalar = PI / 4.0;
/// Two times π (a full turn).
pub const TWO_PI: Scalar = PI * 2.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const DEGREES_PER_RADIAN: Scalar = 180.0 / PI;
/// The factor to convert degrees to radians (PI / 180.0).
pub const RADIANS_PER_DEGREE: Scalar = PI / 180.0;

/// The fixed tolerance used for approximate comparisons.
pub const EPSILON: Scalar = 1e-4;

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use tessera_math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: Scalar) -> Scalar {
    degrees * RADIANS_PER_DEGREE
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use tessera_math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: Scalar) -> Scalar {
    radians * DEGREES_PER_RADIAN
}

/// Performs an approximate equality comparison between two scalars with a custom tolerance.
///
/// # Examples
///
/// ```
/// use tessera_math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: Scalar, b: Scalar, epsilon: Scalar) -> bool {
    (a - b).abs() < epsilon
}

/// Returns `true` when `|a - b| < EPSILON`.
///
/// # Examples
///
/// ```
/// use tessera_math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: Scalar, b: Scalar) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
