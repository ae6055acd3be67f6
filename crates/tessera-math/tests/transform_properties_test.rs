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

use anyhow::Result;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use tessera_math::{
    Mat3, Mat4, MathError, Quaternion, Vec2, Vec3, Vec4, EPSILON, HALF_PI, PI, QUARTER_PI,
};

// --- Sample data shared by the property checks ---

fn sample_vec3s() -> Vec<Vec3> {
    vec![
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-1.0, 2.5, 0.7),
        Vec3::new(0.01, 0.02, -0.03),
        Vec3::new(100.0, -250.0, 12.5),
        Vec3::Z * 7.0,
    ]
}

fn sample_rotations() -> Vec<Quaternion> {
    vec![
        Quaternion::IDENTITY,
        Quaternion::from_euler(0.3, 0.5, -0.2),
        Quaternion::from_euler(-1.2, 2.9, 0.4),
        Quaternion::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, PI)),
        Quaternion::from_axis_angle(Vec4::from_vec3(
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            3.0,
        )),
        // Not unit length on purpose.
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
    ]
}

fn sample_mat4s() -> Vec<Mat4> {
    vec![
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_axis_angle(Vec4::new(0.0, 1.0, 0.0, QUARTER_PI))
            * Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0)),
        Mat4::from_quat(Quaternion::from_euler(0.1, 0.2, 0.3)),
        Mat4::new(
            2.0, 0.0, 0.0, 1.0, //
            0.0, 3.0, 0.0, 2.0, //
            1.0, 0.0, 1.0, 0.0, //
            0.0, 1.0, 0.0, 4.0,
        ),
    ]
}

// --- Properties ---

#[test]
fn normalized_vectors_have_unit_length() {
    for v in sample_vec3s() {
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = EPSILON);
        let homogeneous = Vec4::from_vec3(v, 1.0);
        assert_relative_eq!(homogeneous.normalize().length(), 1.0, epsilon = EPSILON);
        if v.xy() != Vec2::ZERO {
            assert_relative_eq!(v.xy().normalize().length(), 1.0, epsilon = EPSILON);
        }
    }
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn matrix_times_inverse_is_identity() -> Result<()> {
    for m in sample_mat4s() {
        let inv = m.inverse()?;
        assert_abs_diff_eq!(m * inv, Mat4::IDENTITY, epsilon = EPSILON);
    }

    let m = Mat3::from_scale(Vec2::new(2.0, 0.5))
        * Mat3::from_rotation(1.0)
        * Mat3::from_translation(Vec2::new(-3.0, 4.0));
    assert_abs_diff_eq!(m * m.inverse()?, Mat3::IDENTITY, epsilon = EPSILON);
    Ok(())
}

#[test]
fn quaternion_survives_matrix_round_trip() {
    for q in sample_rotations() {
        let unit = q.normalize();
        let back = Quaternion::from_rotation_matrix(&Mat4::from_quat(unit));
        assert!(
            back.approx_eq(&unit) || back.approx_eq(&-unit),
            "{unit:?} came back as {back:?}"
        );
    }
}

#[test]
fn quaternion_and_matrix_rotate_alike() {
    for q in sample_rotations() {
        let unit = q.normalize();
        let m = Mat4::from_quat(unit);
        for v in sample_vec3s() {
            let tolerance = EPSILON * v.length().max(1.0);
            assert_abs_diff_eq!(v * unit, v * m, epsilon = tolerance);
        }
    }
}

#[test]
fn array_round_trips() -> Result<()> {
    let v2 = Vec2::new(1.5, -2.0);
    let v3 = Vec3::new(1.0, 2.0, 3.0);
    let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
    let m3 = Mat3::from_rotation(0.7);
    let m4 = sample_mat4s()[0];

    assert_eq!(Vec2::from_slice(&v2.to_array())?, v2);
    assert_eq!(Vec3::from_slice(&v3.to_array())?, v3);
    assert_eq!(Vec4::from_slice(&v4.to_array())?, v4);
    assert_eq!(Quaternion::from_slice(&q.to_array())?, q);
    assert_eq!(Mat3::from_slice(&m3.to_array())?, m3);
    assert_eq!(Mat4::from_slice(&m4.to_array())?, m4);

    assert_eq!(Vec3::from(v3.to_array()), v3);
    assert_eq!(Mat4::from(m4.to_array()), m4);
    assert_eq!(<[f32; 16]>::from(m4), m4.to_array());
    assert_eq!(Mat3::from(<[f32; 9]>::from(m3)), m3);
    assert_eq!(Quaternion::from(<[f32; 4]>::from(q)), q);
    Ok(())
}

#[test]
fn interpolation_hits_both_endpoints() {
    let (a, b) = (Vec3::new(-1.0, 0.5, 2.0), Vec3::new(4.0, -3.0, 0.25));
    assert_eq!(Vec3::lerp(a, b, 0.0), a);
    assert_relative_eq!(Vec3::lerp(a, b, 1.0), b);

    let (a, b) = (Vec2::new(1.0, 1.0), Vec2::new(-2.0, 8.0));
    assert_eq!(Vec2::lerp(a, b, 0.0), a);
    assert_relative_eq!(Vec2::lerp(a, b, 1.0), b);

    let (ma, mb) = (sample_mat4s()[0], sample_mat4s()[1]);
    assert_eq!(Mat4::lerp(ma, mb, 0.0), ma);
    assert_relative_eq!(Mat4::lerp(ma, mb, 1.0), mb);

    let (m3a, m3b) = (Mat3::IDENTITY, Mat3::from_rotation(2.0));
    assert_eq!(Mat3::lerp(m3a, m3b, 0.0), m3a);
    assert_relative_eq!(Mat3::lerp(m3a, m3b, 1.0), m3b);

    let qa = Quaternion::from_euler(0.1, 0.2, 0.3);
    let qb = Quaternion::from_euler(-0.5, 1.0, 0.25);
    assert_relative_eq!(Quaternion::slerp(qa, qb, 0.0), qa, epsilon = EPSILON);
    assert_relative_eq!(Quaternion::slerp(qa, qb, 1.0), qb, epsilon = EPSILON);
}

#[test]
fn slerp_between_identical_rotations_is_stable() {
    for q in sample_rotations() {
        let unit = q.normalize();
        for t in [0.0, 0.25, 0.5, 0.99, 1.0] {
            assert!(Quaternion::slerp(unit, unit, t).approx_eq(&unit));
        }
    }
}

// --- Concrete scenarios ---

#[test]
fn quarter_turn_in_the_plane() {
    let rotated = Mat3::from_rotation(HALF_PI) * Vec2::new(1.0, 0.0);
    assert_abs_diff_eq!(rotated, Vec2::new(0.0, 1.0), epsilon = EPSILON);
    assert_abs_diff_eq!(Vec2::X.rotate(HALF_PI), rotated, epsilon = EPSILON);
}

#[test]
fn translation_moves_the_origin() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m * Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn cross_product_of_basis_vectors() {
    assert_eq!(
        Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn half_turn_about_z() {
    let q = Quaternion::from_axis_angle(Vec4::new(0.0, 0.0, 1.0, PI));
    assert_abs_diff_eq!(
        q * Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        epsilon = EPSILON
    );
}

#[test]
fn determinants_of_identity_and_repeated_rows() {
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);

    let m3 = Mat3::new(1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0);
    assert_eq!(m3.determinant(), 0.0);

    let m4 = Mat4::new(
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        1.0, 2.0, 3.0, 4.0, //
        9.0, 1.0, 2.0, 3.0,
    );
    assert_eq!(m4.determinant(), 0.0);
    assert_eq!(m4.inverse(), Err(MathError::SingularMatrix));
}

#[test]
fn inequality_is_the_negation_of_equality() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let q = Quaternion::from_euler(0.1, 0.2, 0.3);
    let m = sample_mat4s()[0];
    assert!(!(v != v));
    assert!(!(q != q));
    assert!(!(m != m));
    assert!(v != Vec3::new(1.0, 2.0, 3.5));
}

// --- Error surfaces ---

#[test]
fn invalid_lengths_are_reported() {
    let err = Mat4::from_slice(&[1.0; 15]).unwrap_err();
    assert_eq!(
        err,
        MathError::InvalidLength {
            expected: 16,
            actual: 15
        }
    );
    assert_eq!(err.to_string(), "expected 16 elements, got 15");
    assert!(Vec2::from_slice(&[]).is_err());
    assert!(Quaternion::from_slice(&[0.0; 5]).is_err());
}

#[test]
fn projection_builders_validate_their_frustum() -> Result<()> {
    let m = Mat4::perspective(HALF_PI, 16.0 / 9.0, 0.1, 100.0)?;
    assert_eq!(m.row(2).w, -1.0);
    Mat4::orthographic(1.0, 1.0, -1.0, -1.0, 0.1, 100.0)?;

    let err = Mat4::perspective(HALF_PI, 1.0, 5.0, 5.0).unwrap_err();
    assert!(matches!(err, MathError::InvalidFrustum(_)));
    assert!(err.to_string().starts_with("invalid frustum"));

    // Errors convert into `anyhow::Error` for callers that propagate with `?`.
    let propagated: Result<Mat4> =
        Mat4::perspective_fov_xy(HALF_PI, -1.0, 0.1, 1.0).map_err(Into::into);
    assert!(propagated.is_err());
    Ok(())
}
