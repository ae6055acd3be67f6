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

//! Approximate equality for every value type.
//!
//! `PartialEq` stays exact. The `approx` traits compare component by component and
//! default to [`EPSILON`]. Each type also gets an inherent `approx_eq` applying the
//! strict `|a - b| < EPSILON` test of [`crate::approx_eq`] to every component.

use crate::matrix::{Mat3, Mat4};
use crate::quaternion::Quaternion;
use crate::scalar::{approx_eq, Scalar, EPSILON};
use crate::vector::{Vec2, Vec3, Vec4};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

// Every type flattens to a fixed-size array through `to_array`, so all of them
// compare the same way.
macro_rules! impl_approx {
    ($($ty:ty),+ $(,)?) => {$(
        impl AbsDiffEq for $ty {
            type Epsilon = Scalar;

            #[inline]
            fn default_epsilon() -> Scalar {
                EPSILON
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
                let (lhs, rhs) = (self.to_array(), other.to_array());
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(l, r)| l.abs_diff_eq(r, epsilon))
            }
        }

        impl RelativeEq for $ty {
            #[inline]
            fn default_max_relative() -> Scalar {
                <Scalar as RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
                let (lhs, rhs) = (self.to_array(), other.to_array());
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(l, r)| l.relative_eq(r, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            #[inline]
            fn default_max_ulps() -> u32 {
                <Scalar as UlpsEq>::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Scalar, max_ulps: u32) -> bool {
                let (lhs, rhs) = (self.to_array(), other.to_array());
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(l, r)| l.ulps_eq(r, epsilon, max_ulps))
            }
        }

        impl $ty {
            /// Returns `true` when every component is within [`EPSILON`] of `other`'s.
            #[inline]
            pub fn approx_eq(&self, other: &Self) -> bool {
                let (lhs, rhs) = (self.to_array(), other.to_array());
                lhs.iter().zip(rhs.iter()).all(|(l, r)| approx_eq(*l, *r))
            }
        }
    )+};
}

impl_approx!(Vec2, Vec3, Vec4, Quaternion, Mat3, Mat4);
