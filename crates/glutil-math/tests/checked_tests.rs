// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use glutil_math::consts::FRAC_PI_3;
use glutil_math::{checked, Mat3, Mat4, MathError, Tolerance, Vec3, Vec4};
use tracing_subscriber::EnvFilter;

mod common;
use common::{sample_affine, sample_linear};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn ok_results_match_unchecked_bit_for_bit() {
    init_tracing();
    let v = Vec3::new(3.0, -4.0, 12.0);
    assert_eq!(checked::normalize3(&v), Ok(v.normalize()));
    let q = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(checked::normalize4(&q), Ok(q.normalize()));

    let m = sample_linear();
    assert_eq!(checked::inverse3(&m), Ok(m.inverse()));
    let a = sample_affine();
    assert_eq!(checked::inverse4(&a), Ok(a.inverse()));

    let axis = Vec3::new(1.0, 1.0, 0.0);
    assert_eq!(checked::rotation(0.3, axis), Ok(glutil_math::rotation(0.3, axis)));

    assert_eq!(
        checked::frustum(-1.0, 1.0, -0.5, 0.5, 0.1, 100.0),
        Ok(glutil_math::frustum(-1.0, 1.0, -0.5, 0.5, 0.1, 100.0))
    );
    assert_eq!(
        checked::perspective(FRAC_PI_3, 1.5, 0.1, 100.0),
        Ok(glutil_math::perspective(FRAC_PI_3, 1.5, 0.1, 100.0))
    );
    assert_eq!(
        checked::orthogonal(-4.0, 4.0, -3.0, 3.0, 0.0, 10.0),
        Ok(glutil_math::orthogonal(-4.0, 4.0, -3.0, 3.0, 0.0, 10.0))
    );

    let eye = Vec3::new(0.0, 2.0, 5.0);
    let forward = Vec3::new(0.0, -0.3, -1.0);
    assert_eq!(
        checked::view(eye, Vec3::UNIT_Y, forward),
        Ok(glutil_math::view(eye, Vec3::UNIT_Y, forward))
    );
}

#[test]
fn zero_length_vectors_are_rejected() {
    init_tracing();
    assert!(matches!(
        checked::normalize3(&Vec3::ZERO),
        Err(MathError::ZeroLength { .. })
    ));
    assert!(matches!(
        checked::normalize4(&Vec4::new(1e-9, 0.0, 0.0, 0.0)),
        Err(MathError::ZeroLength { .. })
    ));
    assert!(matches!(
        checked::rotation(1.0, Vec3::ZERO),
        Err(MathError::ZeroLength { .. })
    ));
}

#[test]
fn non_finite_inputs_are_rejected() {
    init_tracing();
    let nan = Vec3::new(glutil_math::Real::NAN, 0.0, 1.0);
    assert_eq!(
        checked::normalize3(&nan),
        Err(MathError::NonFinite { what: "vector length" })
    );
    assert_eq!(
        checked::rotation(glutil_math::Real::INFINITY, Vec3::UNIT_Z),
        Err(MathError::NonFinite { what: "angle" })
    );
    assert_eq!(
        checked::view(nan, Vec3::UNIT_Y, -Vec3::UNIT_Z),
        Err(MathError::NonFinite { what: "eye" })
    );
}

#[test]
fn singular_matrices_are_rejected() {
    init_tracing();
    let flat = Mat3::from_cols(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(
        checked::inverse3(&flat),
        Err(MathError::Singular { determinant: 0.0 })
    );
    assert!(matches!(
        checked::inverse4(&Mat4::from_scalar(0.0)),
        Err(MathError::Singular { .. })
    ));
}

#[test]
fn singularity_is_judged_relative_to_scale() {
    init_tracing();
    // Tiny but perfectly conditioned: det = 1e-6, columns of length 1e-2.
    let small = Mat3::from_scalar(1e-2);
    assert!(checked::inverse3(&small).is_ok());

    // Nearly dependent columns at unit scale.
    let skinny = Mat3::from_cols(
        Vec3::UNIT_X,
        Vec3::UNIT_Y,
        Vec3::new(1.0, 1.0, 1e-8),
    );
    assert!(checked::inverse3(&skinny).is_err());

    // Tolerances are configurable in both directions.
    let loose = Tolerance::new(0.0, 0.0);
    assert!(checked::inverse3_with(&Mat3::from_scalar(1e-4), loose).is_ok());
    // sample_affine's determinant is about a fifth of its Hadamard bound.
    let strict = Tolerance::new(0.0, 0.5);
    assert!(checked::inverse4_with(&Mat4::IDENTITY, strict).is_ok());
    assert!(checked::inverse4_with(&sample_affine(), strict).is_err());
}

#[test]
fn degenerate_projection_volumes_are_rejected() {
    init_tracing();
    assert_eq!(
        checked::frustum(1.0, 1.0, -1.0, 1.0, 0.1, 10.0),
        Err(MathError::DegenerateVolume { axis: "x", extent: 0.0 })
    );
    assert_eq!(
        checked::orthogonal(-1.0, 1.0, 2.0, 2.0, 0.1, 10.0),
        Err(MathError::DegenerateVolume { axis: "y", extent: 0.0 })
    );
    assert_eq!(
        checked::orthogonal(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0),
        Err(MathError::DegenerateVolume { axis: "z", extent: 0.0 })
    );
    assert!(matches!(
        checked::perspective(0.0, 1.0, 0.1, 10.0),
        Err(MathError::DegenerateVolume { axis: "x", .. })
    ));
    assert!(matches!(
        checked::perspective(FRAC_PI_3, 1.0, 0.1, 0.1),
        Err(MathError::DegenerateVolume { axis: "z", .. })
    ));
    assert!(checked::frustum_with([-1.0, 1.0, -1.0, 1.0, 0.1, 10.0], Tolerance::default()).is_ok());
}

#[test]
fn parallel_view_basis_is_rejected() {
    init_tracing();
    assert_eq!(
        checked::view(Vec3::ZERO, Vec3::UNIT_Y, Vec3::UNIT_Y * -3.0),
        Err(MathError::ParallelBasis)
    );
    assert_eq!(
        checked::view(Vec3::ZERO, Vec3::UNIT_Y, Vec3::ZERO),
        Err(MathError::ParallelBasis)
    );
    assert_eq!(
        checked::view(Vec3::ZERO, Vec3::ZERO, -Vec3::UNIT_Z),
        Err(MathError::ParallelBasis)
    );
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        MathError::ParallelBasis.to_string(),
        "view basis is degenerate: up and forward are parallel or zero"
    );
    assert_eq!(
        MathError::DegenerateVolume { axis: "z", extent: 0.0 }.to_string(),
        "projection volume is degenerate along z (extent 0)"
    );
    assert_eq!(
        MathError::NonFinite { what: "eye" }.to_string(),
        "eye is not finite"
    );
}
