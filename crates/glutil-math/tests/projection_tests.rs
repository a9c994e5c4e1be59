// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use glutil_math::consts::{FRAC_PI_2, FRAC_PI_3};
use glutil_math::{frustum, orthogonal, perspective, transpose, view, Mat3, Mat4, Real, Vec3, Vec4};

mod common;
use common::{approx_eq, approx_eq3, approx_eq4, approx_mat3, approx_mat4};

/// Clip-space position followed by the perspective divide.
fn to_ndc(m: Mat4, p: Vec3) -> Vec3 {
    let clip = m * Vec4::from_vec3(p, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn frustum_layout() {
    let m = frustum(-2.0, 4.0, -1.0, 3.0, 1.0, 9.0);
    // Δx = 6, Δy = 4, Δz = 8
    approx_eq4(m.x, Vec4::new(2.0 / 6.0, 0.0, 0.0, 0.0));
    approx_eq4(m.y, Vec4::new(0.0, 2.0 / 4.0, 0.0, 0.0));
    approx_eq4(m.z, Vec4::new(2.0 / 6.0, 2.0 / 4.0, -10.0 / 8.0, -1.0));
    approx_eq4(m.w, Vec4::new(0.0, 0.0, -18.0 / 8.0, 0.0));
}

#[test]
fn frustum_maps_near_and_far_corners_to_clip_cube() {
    let (l, r, b, t, n, f) = (-2.0, 4.0, -1.0, 3.0, 1.0, 9.0);
    let m = frustum(l, r, b, t, n, f);
    approx_eq3(to_ndc(m, Vec3::new(l, b, -n)), Vec3::new(-1.0, -1.0, -1.0));
    approx_eq3(to_ndc(m, Vec3::new(r, t, -n)), Vec3::new(1.0, 1.0, -1.0));
    // The far corner lies on the ray through the near corner.
    let scale = f / n;
    approx_eq3(
        to_ndc(m, Vec3::new(r * scale, t * scale, -f)),
        Vec3::new(1.0, 1.0, 1.0),
    );
}

#[test]
fn perspective_right_angle_matches_closed_form() {
    let p = perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
    approx_eq(p.x.x, 1.0);
    approx_eq(p.y.y, 1.0);
    approx_eq(p.z.z, -11.0 / 9.0);
    assert_eq!(p.z.w, -1.0);
    approx_eq(p.w.z, -20.0 / 9.0);
    approx_mat4(p, frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0));
}

#[test]
fn perspective_applies_aspect_to_width() {
    let aspect: Real = 16.0 / 9.0;
    let p = perspective(FRAC_PI_3, aspect, 0.1, 100.0);
    approx_eq(p.y.y / p.x.x, aspect);
    assert_eq!(p.z.x, 0.0);
    assert_eq!(p.z.y, 0.0);
    assert_eq!(p.w.w, 0.0);
}

#[test]
fn perspective_depth_range() {
    let p = perspective(FRAC_PI_3, 1.0, 0.5, 20.0);
    approx_eq(to_ndc(p, Vec3::new(0.0, 0.0, -0.5)).z, -1.0);
    approx_eq(to_ndc(p, Vec3::new(0.0, 0.0, -20.0)).z, 1.0);
}

#[test]
fn orthogonal_layout() {
    let m = orthogonal(-1.0, 3.0, 2.0, 6.0, 0.5, 10.5);
    // Δx = 4, Δy = 4, Δz = 10
    approx_eq4(m.x, Vec4::new(0.5, 0.0, 0.0, 0.0));
    approx_eq4(m.y, Vec4::new(0.0, 0.5, 0.0, 0.0));
    approx_eq4(m.z, Vec4::new(0.0, 0.0, -0.2, 0.0));
    approx_eq4(m.w, Vec4::new(-0.5, -2.0, -1.1, 1.0));
}

#[test]
fn orthogonal_maps_box_to_clip_cube() {
    let (l, r, b, t, n, f) = (-1.0, 3.0, 2.0, 6.0, 0.5, 10.5);
    let m = orthogonal(l, r, b, t, n, f);
    approx_eq3(m.transform_point(&Vec3::new(l, b, -n)), Vec3::new(-1.0, -1.0, -1.0));
    approx_eq3(m.transform_point(&Vec3::new(r, t, -f)), Vec3::new(1.0, 1.0, 1.0));
    approx_eq3(
        m.transform_point(&Vec3::new(1.0, 4.0, -5.5)),
        Vec3::new(0.0, 0.0, 0.0),
    );
}

#[test]
fn view_moves_eye_to_origin() {
    let v = view(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    let o = v * Vec4::new(0.0, 0.0, 5.0, 1.0);
    approx_eq4(o, Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn view_places_forward_on_negative_z_and_up_on_positive_y() {
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let forward = Vec3::new(1.0, -1.0, 0.5);
    let up = Vec3::UNIT_Y;
    let v = view(eye, up, forward);
    let f = forward.normalize();
    approx_eq3(v.transform_point(&(eye + f * 4.0)), Vec3::new(0.0, 0.0, -4.0));

    let right = up.cross(&forward).normalize();
    approx_eq3(v.transform_point(&(eye + right)), Vec3::UNIT_X);

    let true_up = forward.cross(&right).normalize();
    approx_eq3(v.transform_direction(&true_up), Vec3::UNIT_Y);
    assert!(true_up.y > 0.0);
}

#[test]
fn view_reorthogonalises_a_skewed_up_vector() {
    let v = view(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.4), Vec3::new(0.0, 0.0, -2.0));
    let r: Mat3 = v.linear();
    approx_mat3(transpose(r) * r, Mat3::IDENTITY);
    approx_eq(r.determinant().abs(), 1.0);
    approx_eq4(v.w, Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn view_composes_rotation_after_translation() {
    let eye = Vec3::new(-3.0, 0.5, 2.0);
    let v = view(eye, Vec3::UNIT_Y, Vec3::new(0.0, 0.0, -1.0));
    let rotation_only = view(Vec3::ZERO, Vec3::UNIT_Y, Vec3::new(0.0, 0.0, -1.0));
    approx_mat4(v, rotation_only * glutil_math::translation(-eye));
}

#[test]
fn view_with_parallel_basis_is_nan() {
    let v = view(Vec3::ZERO, Vec3::UNIT_Y, Vec3::UNIT_Y * 2.0);
    assert!(!v.x.is_finite());
}
