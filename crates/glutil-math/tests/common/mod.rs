// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use glutil_math::{Mat3, Mat4, Real, Vec3, Vec4};

pub const ABS_TOL: Real = 1e-5;
pub const REL_TOL: Real = 1e-5;

pub fn close(a: Real, b: Real) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= ABS_TOL.max(REL_TOL * scale)
}

pub fn approx_eq(a: Real, b: Real) {
    assert!(close(a, b), "expected {b}, got {a} (diff {})", (a - b).abs());
}

pub fn approx_eq_slice(a: &[Real], b: &[Real]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(close(*x, *y), "index {i}: {a:?} vs {b:?}");
    }
}

pub fn approx_eq3(a: Vec3, b: Vec3) {
    approx_eq_slice(&a.to_array(), &b.to_array());
}

pub fn approx_eq4(a: Vec4, b: Vec4) {
    approx_eq_slice(&a.to_array(), &b.to_array());
}

pub fn approx_mat3(a: Mat3, b: Mat3) {
    approx_eq_slice(&a.to_cols_array(), &b.to_cols_array());
}

pub fn approx_mat4(a: Mat4, b: Mat4) {
    approx_eq_slice(&a.to_cols_array(), &b.to_cols_array());
}

/// A well-conditioned affine transform used across tests.
pub fn sample_affine() -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0, 0.5, 0.0, 0.0),
        Vec4::new(-0.25, 1.5, 0.75, 0.0),
        Vec4::new(0.1, -0.3, 3.0, 0.0),
        Vec4::new(4.0, -2.0, 1.0, 1.0),
    )
}

/// A well-conditioned general 3×3 matrix used across tests.
pub fn sample_linear() -> Mat3 {
    Mat3::from_cols(
        Vec3::new(3.0, 1.0, -2.0),
        Vec3::new(0.5, 4.0, 1.0),
        Vec3::new(-1.0, 2.0, 5.0),
    )
}
