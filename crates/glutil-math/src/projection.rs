// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera and projection matrix builders.
//!
//! All projections target the right-handed OpenGL clip volume: the camera
//! looks down `-Z`, and `nearZ`/`farZ` are positive distances mapped to
//! NDC depth `-1` and `+1`.

use crate::{algebra::translation, cross, Mat4, Real, Vec3, Vec4};

/// Off-centre perspective projection for the view volume bounded by
/// `left..right`, `bottom..top` on the near plane and `nearZ..farZ` in depth.
///
/// Column layout:
///
/// | column | contents |
/// |---|---|
/// | `x` | `(2n/Δx, 0, 0, 0)` |
/// | `y` | `(0, 2n/Δy, 0, 0)` |
/// | `z` | `((r+l)/Δx, (t+b)/Δy, -(n+f)/Δz, -1)` |
/// | `w` | `(0, 0, -2nf/Δz, 0)` |
///
/// A zero extent divides by zero; see [`crate::checked::frustum`].
pub fn frustum(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    near_z: Real,
    far_z: Real,
) -> Mat4 {
    let delta_x = right - left;
    let delta_y = top - bottom;
    let delta_z = far_z - near_z;

    Mat4::from_cols(
        Vec4::new(2.0 * near_z / delta_x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near_z / delta_y, 0.0, 0.0),
        Vec4::new(
            (right + left) / delta_x,
            (top + bottom) / delta_y,
            -(near_z + far_z) / delta_z,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * near_z * far_z / delta_z, 0.0),
    )
}

/// Symmetric perspective projection from a vertical field of view in radians.
///
/// The near-plane half extents are `h = tan(fovy / 2) · nearZ` and
/// `w = h · aspect`; the result is `frustum(-w, w, -h, h, nearZ, farZ)`.
///
/// ```
/// use glutil_math::{consts::FRAC_PI_2, perspective};
/// let p = perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
/// assert!((p.x.x - 1.0).abs() < 1e-6);
/// assert!((p.y.y - 1.0).abs() < 1e-6);
/// assert_eq!(p.z.w, -1.0);
/// ```
pub fn perspective(fovy: Real, aspect: Real, near_z: Real, far_z: Real) -> Mat4 {
    let (half_w, half_h) = perspective_half_extents(fovy, aspect, near_z);
    frustum(-half_w, half_w, -half_h, half_h, near_z, far_z)
}

pub(crate) fn perspective_half_extents(fovy: Real, aspect: Real, near_z: Real) -> (Real, Real) {
    let half_h = (fovy / 2.0).tan() * near_z;
    (half_h * aspect, half_h)
}

/// Orthographic projection of the box `left..right`, `bottom..top`,
/// `nearZ..farZ` onto the clip cube.
///
/// Diagonal `(2/Δx, 2/Δy, -2/Δz, 1)`; the translation column holds
/// `(-(r+l)/Δx, -(t+b)/Δy, -(n+f)/Δz, 1)`.
pub fn orthogonal(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    near_z: Real,
    far_z: Real,
) -> Mat4 {
    let delta_x = right - left;
    let delta_y = top - bottom;
    let delta_z = far_z - near_z;

    Mat4::from_cols(
        Vec4::new(2.0 / delta_x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / delta_y, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / delta_z, 0.0),
        Vec4::new(
            -(right + left) / delta_x,
            -(top + bottom) / delta_y,
            -(near_z + far_z) / delta_z,
            1.0,
        ),
    )
}

/// World-to-view matrix for a camera at `eye`.
///
/// The basis is `right = up × forward`, then `up' = forward × right` so the
/// three axes are mutually orthogonal even when `up` and `forward` are not.
/// Each axis is normalised independently; the rows of the rotation are
/// `right`, `up'`, and `-forward`. The result is
/// `transpose(basis) * translation(-eye)`: translate `eye` to the origin, then
/// rotate.
///
/// Note the operand order of the first cross product: for `up = +Y`,
/// `forward = -Z` it gives `right = -X`, so view-space `x` mirrors world `x`
/// for that camera.
///
/// Parallel or zero `up`/`forward` normalise a zero vector and produce NaN;
/// see [`crate::checked::view`].
///
/// ```
/// use glutil_math::{view, Vec3};
/// let v = view(Vec3::new(0.0, 0.0, 5.0), Vec3::UNIT_Y, -Vec3::UNIT_Z);
/// assert_eq!(v.transform_point(&Vec3::new(0.0, 0.0, 5.0)), Vec3::ZERO);
/// ```
pub fn view(eye: Vec3, up: Vec3, forward: Vec3) -> Mat4 {
    let right = cross(up, forward);
    let up = cross(forward, right);

    let right = right.normalize();
    let up = up.normalize();
    let forward = forward.normalize();

    let basis = Mat4::from_cols(
        Vec4::from_vec3(right, 0.0),
        Vec4::from_vec3(up, 0.0),
        Vec4::from_vec3(-forward, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );
    basis.transpose() * translation(-eye)
}
