// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Free-function transform algebra over the vector and matrix types.
//!
//! `dot`, `det`, `transpose`, and `inverse` are generic over the [`Dot`] and
//! [`SquareMatrix`] traits so one name serves both sizes.

use crate::consts::TAU;
use crate::{Mat3, Mat4, Real, Vec3, Vec4};

/// Types with an inner product.
pub trait Dot: Copy {
    /// Sum of component-wise products.
    fn dot(self, other: Self) -> Real;
}

impl Dot for Vec3 {
    fn dot(self, other: Self) -> Real {
        Vec3::dot(&self, &other)
    }
}

impl Dot for Vec4 {
    fn dot(self, other: Self) -> Real {
        Vec4::dot(&self, &other)
    }
}

/// Square matrices with the classical adjugate-based operations.
pub trait SquareMatrix: Copy {
    /// Multiplicative identity.
    const IDENTITY: Self;

    /// Determinant.
    fn determinant(&self) -> Real;

    /// Rows and columns swapped.
    fn transpose(&self) -> Self;

    /// Adjugate divided by the determinant (non-finite when singular).
    fn inverse(&self) -> Self;
}

impl SquareMatrix for Mat3 {
    const IDENTITY: Self = Mat3::IDENTITY;

    fn determinant(&self) -> Real {
        Mat3::determinant(self)
    }

    fn transpose(&self) -> Self {
        Mat3::transpose(self)
    }

    fn inverse(&self) -> Self {
        Mat3::inverse(self)
    }
}

impl SquareMatrix for Mat4 {
    const IDENTITY: Self = Mat4::IDENTITY;

    fn determinant(&self) -> Real {
        Mat4::determinant(self)
    }

    fn transpose(&self) -> Self {
        Mat4::transpose(self)
    }

    fn inverse(&self) -> Self {
        Mat4::inverse(self)
    }
}

/// 3D cross product `a × b`.
///
/// ```
/// use glutil_math::{cross, Vec3};
/// assert_eq!(cross(Vec3::UNIT_X, Vec3::UNIT_Y), Vec3::UNIT_Z);
/// ```
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(&b)
}

/// Inner product of two [`Vec3`]s or two [`Vec4`]s.
///
/// ```
/// use glutil_math::{dot, Vec3};
/// assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)), 32.0);
/// ```
pub fn dot<V: Dot>(a: V, b: V) -> Real {
    a.dot(b)
}

/// Four-dimensional analogue of the cross product.
///
/// Returns a vector orthogonal to `a`, `b`, and `c`. Component `k` is the
/// determinant of the 3×3 matrix whose columns are `a`, `b`, `c` with
/// coordinate `k` removed, signed `+, -, +, -` across `x, y, z, w`.
pub fn wedge(a: Vec4, b: Vec4, c: Vec4) -> Vec4 {
    let minor = |pick: fn(&Vec4) -> Vec3| {
        Mat3::from_cols(pick(&a), pick(&b), pick(&c)).determinant()
    };
    Vec4::new(
        minor(|v| Vec3::new(v.y, v.z, v.w)),
        -minor(|v| Vec3::new(v.x, v.z, v.w)),
        minor(|v| Vec3::new(v.x, v.y, v.w)),
        -minor(|v| Vec3::new(v.x, v.y, v.z)),
    )
}

/// Determinant of a [`Mat3`] or [`Mat4`].
pub fn det<M: SquareMatrix>(m: M) -> Real {
    m.determinant()
}

/// Transpose of a [`Mat3`] or [`Mat4`].
pub fn transpose<M: SquareMatrix>(m: M) -> M {
    m.transpose()
}

/// Inverse of a [`Mat3`] or [`Mat4`].
///
/// No singularity check is made: a zero determinant produces infinities or
/// NaN. Use [`crate::checked::inverse3`] or [`crate::checked::inverse4`] when
/// the input may be near-singular.
pub fn inverse<M: SquareMatrix>(m: M) -> M {
    m.inverse()
}

/// Skew-symmetric matrix with `skew(v) * u == cross(v, u)` for every `u`.
pub fn skew(v: Vec3) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(0.0, v.z, -v.y),
        Vec3::new(-v.z, 0.0, v.x),
        Vec3::new(v.y, -v.x, 0.0),
    )
}

/// Rotation by `angle` radians about `axis` (Rodrigues' formula).
///
/// `axis` is normalised first; it need not be unit length but must not be
/// zero (a zero axis yields NaN). The result is
/// `cos θ · I + sin θ · skew(a) + (1 − cos θ) · a aᵀ`, which is orthogonal with
/// determinant 1. Positive angles rotate counter-clockwise when looking down
/// the axis towards the origin.
///
/// ```
/// use glutil_math::{consts::FRAC_PI_2, rotation, Vec3};
/// let r = rotation(FRAC_PI_2, Vec3::UNIT_Z);
/// let y = r * Vec3::UNIT_X;
/// assert!((y - Vec3::UNIT_Y).length() < 1e-6);
/// ```
pub fn rotation(angle: Real, axis: Vec3) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let a = axis.normalize();
    Mat3::from_scalar(c) + skew(a * s) + Mat3::outer(a, a) * (1.0 - c)
}

/// Affine translation: identity with `v` in the `w` column.
pub fn translation(v: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.w.x = v.x;
    m.w.y = v.y;
    m.w.z = v.z;
    m
}

/// Non-uniform 4×4 scale with diagonal `(v.x, v.y, v.z, 1)`.
pub fn scale(v: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.x.x = v.x;
    m.y.y = v.y;
    m.z.z = v.z;
    m
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: Real) -> Real {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: Real) -> Real {
    value * (360.0 / TAU)
}
