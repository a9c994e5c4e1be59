// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fallible variants of the operations that can hit a degenerate input.
//!
//! Each function tests the condition that would make its unchecked
//! counterpart divide by (near-)zero, and otherwise delegates to it, so an
//! `Ok` result is bit-for-bit what the unchecked function returns. The plain
//! names use [`Tolerance::default`]; the `_with` forms take an explicit one.
//!
//! Rejections are reported as `debug`-level `tracing` events.
//!
//! ```
//! use glutil_math::{checked, Mat3, MathError};
//! assert!(matches!(
//!     checked::inverse3(&Mat3::from_scalar(0.0)),
//!     Err(MathError::Singular { .. })
//! ));
//! ```

use tracing::debug;

use crate::projection::perspective_half_extents;
use crate::{cross, Mat3, Mat4, MathError, Real, Tolerance, Vec3, Vec4};

fn reject(op: &'static str, err: MathError) -> MathError {
    debug!(op, error = %err, "rejecting degenerate input");
    err
}

fn check_finite(op: &'static str, what: &'static str, value: Real) -> Result<(), MathError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(op, MathError::NonFinite { what }))
    }
}

fn check_length(op: &'static str, length: Real, tol: Tolerance) -> Result<(), MathError> {
    check_finite(op, "vector length", length)?;
    if length <= tol.absolute {
        return Err(reject(op, MathError::ZeroLength { length }));
    }
    Ok(())
}

fn check_determinant(
    op: &'static str,
    determinant: Real,
    column_scale: Real,
    tol: Tolerance,
) -> Result<(), MathError> {
    check_finite(op, "determinant", determinant)?;
    // Relative only: the determinant scales with the product of column lengths.
    if determinant.abs() <= tol.relative * column_scale {
        return Err(reject(op, MathError::Singular { determinant }));
    }
    Ok(())
}

fn check_extent(
    op: &'static str,
    axis: &'static str,
    lo: Real,
    hi: Real,
    tol: Tolerance,
) -> Result<(), MathError> {
    let extent = hi - lo;
    check_finite(op, "projection bound", extent)?;
    if tol.is_negligible(extent, lo.abs().max(hi.abs())) {
        return Err(reject(op, MathError::DegenerateVolume { axis, extent }));
    }
    Ok(())
}

fn check_volume(op: &'static str, bounds: [Real; 6], tol: Tolerance) -> Result<(), MathError> {
    let [left, right, bottom, top, near_z, far_z] = bounds;
    check_extent(op, "x", left, right, tol)?;
    check_extent(op, "y", bottom, top, tol)?;
    check_extent(op, "z", near_z, far_z, tol)
}

/// [`Vec3::normalize`] that rejects zero-length and non-finite vectors.
pub fn normalize3(v: &Vec3) -> Result<Vec3, MathError> {
    normalize3_with(v, Tolerance::default())
}

/// [`normalize3`] with an explicit tolerance.
pub fn normalize3_with(v: &Vec3, tol: Tolerance) -> Result<Vec3, MathError> {
    check_length("normalize3", v.length(), tol)?;
    Ok(v.normalize())
}

/// [`Vec4::normalize`] that rejects zero-length and non-finite vectors.
pub fn normalize4(v: &Vec4) -> Result<Vec4, MathError> {
    normalize4_with(v, Tolerance::default())
}

/// [`normalize4`] with an explicit tolerance.
pub fn normalize4_with(v: &Vec4, tol: Tolerance) -> Result<Vec4, MathError> {
    check_length("normalize4", v.length(), tol)?;
    Ok(v.normalize())
}

/// [`Mat3::inverse`] that rejects singular matrices.
///
/// The matrix is singular when `|det| <= tol.relative * |x|·|y|·|z|`. The
/// product of the column lengths bounds the determinant (Hadamard's
/// inequality), so uniformly scaled matrices are judged alike.
pub fn inverse3(m: &Mat3) -> Result<Mat3, MathError> {
    inverse3_with(m, Tolerance::default())
}

/// [`inverse3`] with an explicit tolerance.
pub fn inverse3_with(m: &Mat3, tol: Tolerance) -> Result<Mat3, MathError> {
    let column_scale = m.x.length() * m.y.length() * m.z.length();
    check_determinant("inverse3", m.determinant(), column_scale, tol)?;
    Ok(m.inverse())
}

/// [`Mat4::inverse`] that rejects singular matrices.
pub fn inverse4(m: &Mat4) -> Result<Mat4, MathError> {
    inverse4_with(m, Tolerance::default())
}

/// [`inverse4`] with an explicit tolerance.
pub fn inverse4_with(m: &Mat4, tol: Tolerance) -> Result<Mat4, MathError> {
    let column_scale = m.x.length() * m.y.length() * m.z.length() * m.w.length();
    check_determinant("inverse4", m.determinant(), column_scale, tol)?;
    Ok(m.inverse())
}

/// [`crate::rotation`] that rejects a zero-length axis or non-finite angle.
pub fn rotation(angle: Real, axis: Vec3) -> Result<Mat3, MathError> {
    rotation_with(angle, axis, Tolerance::default())
}

/// [`rotation`] with an explicit tolerance.
pub fn rotation_with(angle: Real, axis: Vec3, tol: Tolerance) -> Result<Mat3, MathError> {
    check_finite("rotation", "angle", angle)?;
    check_length("rotation", axis.length(), tol)?;
    Ok(crate::rotation(angle, axis))
}

/// [`crate::frustum`] that rejects a zero-extent view volume.
pub fn frustum(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    near_z: Real,
    far_z: Real,
) -> Result<Mat4, MathError> {
    frustum_with([left, right, bottom, top, near_z, far_z], Tolerance::default())
}

/// [`frustum`] with an explicit tolerance; `bounds` is
/// `[left, right, bottom, top, nearZ, farZ]`.
pub fn frustum_with(bounds: [Real; 6], tol: Tolerance) -> Result<Mat4, MathError> {
    check_volume("frustum", bounds, tol)?;
    let [left, right, bottom, top, near_z, far_z] = bounds;
    Ok(crate::frustum(left, right, bottom, top, near_z, far_z))
}

/// [`crate::perspective`] that rejects a field of view, aspect ratio, or
/// depth range collapsing the view volume.
pub fn perspective(
    fovy: Real,
    aspect: Real,
    near_z: Real,
    far_z: Real,
) -> Result<Mat4, MathError> {
    perspective_with(fovy, aspect, near_z, far_z, Tolerance::default())
}

/// [`perspective`] with an explicit tolerance.
pub fn perspective_with(
    fovy: Real,
    aspect: Real,
    near_z: Real,
    far_z: Real,
    tol: Tolerance,
) -> Result<Mat4, MathError> {
    let (half_w, half_h) = perspective_half_extents(fovy, aspect, near_z);
    check_volume(
        "perspective",
        [-half_w, half_w, -half_h, half_h, near_z, far_z],
        tol,
    )?;
    Ok(crate::perspective(fovy, aspect, near_z, far_z))
}

/// [`crate::orthogonal`] that rejects a zero-extent box.
pub fn orthogonal(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    near_z: Real,
    far_z: Real,
) -> Result<Mat4, MathError> {
    orthogonal_with([left, right, bottom, top, near_z, far_z], Tolerance::default())
}

/// [`orthogonal`] with an explicit tolerance; `bounds` is
/// `[left, right, bottom, top, nearZ, farZ]`.
pub fn orthogonal_with(bounds: [Real; 6], tol: Tolerance) -> Result<Mat4, MathError> {
    check_volume("orthogonal", bounds, tol)?;
    let [left, right, bottom, top, near_z, far_z] = bounds;
    Ok(crate::orthogonal(left, right, bottom, top, near_z, far_z))
}

/// [`crate::view`] that rejects parallel or zero `up`/`forward` and a
/// non-finite `eye`.
pub fn view(eye: Vec3, up: Vec3, forward: Vec3) -> Result<Mat4, MathError> {
    view_with(eye, up, forward, Tolerance::default())
}

/// [`view`] with an explicit tolerance.
pub fn view_with(eye: Vec3, up: Vec3, forward: Vec3, tol: Tolerance) -> Result<Mat4, MathError> {
    if !eye.is_finite() {
        return Err(reject("view", MathError::NonFinite { what: "eye" }));
    }
    let right = cross(up, forward);
    let scale = up.length() * forward.length();
    check_finite("view", "basis", scale)?;
    if scale <= tol.absolute || tol.is_negligible(right.length(), scale) {
        return Err(reject("view", MathError::ParallelBasis));
    }
    Ok(crate::view(eye, up, forward))
}
