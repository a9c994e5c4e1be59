// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{Real, Vec3};

/// Column-major 3×3 matrix representing a linear map.
///
/// - `x`, `y`, `z` are the **columns**; `m * v` is
///   `m.x * v.x + m.y * v.y + m.z * v.z`.
/// - `a * b` applies `a` to every column of `b`, so `(a * b) * v == a * (b * v)`.
///   Multiplication is associative but not commutative.
/// - `Default` is the identity.
///
/// # Examples
/// ```
/// use glutil_math::{Mat3, Vec3};
/// let m = Mat3::from_scalar(2.0);
/// assert_eq!((m * Vec3::new(1.0, 2.0, 3.0)).to_array(), [2.0, 4.0, 6.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    /// First column.
    pub x: Vec3,
    /// Second column.
    pub y: Vec3,
    /// Third column.
    pub z: Vec3,
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_scalar(1.0);

    /// Builds `diag(s, s, s)`.
    pub const fn from_scalar(s: Real) -> Self {
        Self::from_cols(
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(0.0, s, 0.0),
            Vec3::new(0.0, 0.0, s),
        )
    }

    /// Builds a matrix from its three columns.
    pub const fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { x, y, z }
    }

    /// Outer product `a bᵀ`: the matrix whose columns are `b.x·a, b.y·a, b.z·a`.
    pub fn outer(a: Vec3, b: Vec3) -> Self {
        Self::from_cols(a * b.x, a * b.y, a * b.z)
    }

    /// Returns the nine components in column-major order.
    pub fn to_cols_array(self) -> [Real; 9] {
        bytemuck::cast(self)
    }

    /// Applies the matrix to a vector (`self * v`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.transform(&rhs.x),
            self.transform(&rhs.y),
            self.transform(&rhs.z),
        )
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.x.x, self.y.x, self.z.x),
            Vec3::new(self.x.y, self.y.y, self.z.y),
            Vec3::new(self.x.z, self.y.z, self.z.z),
        )
    }

    /// Scalar triple product `x · (y × z)`.
    pub fn determinant(&self) -> Real {
        self.x.dot(&self.y.cross(&self.z))
    }

    /// Adjugate divided by the determinant.
    ///
    /// The adjugate's rows are the cross products of column pairs. A singular
    /// matrix divides by zero and yields non-finite components; see
    /// [`crate::checked::inverse3`].
    pub fn inverse(&self) -> Self {
        let adjugate = Self::from_cols(
            self.y.cross(&self.z),
            self.z.cross(&self.x),
            self.x.cross(&self.y),
        )
        .transpose();
        adjugate / self.determinant()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Mat3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_cols(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self::Output {
        Self::from_cols(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Mat3> for Real {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs * self
    }
}

impl Div<Real> for Mat3 {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Real) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform(&rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Mat3> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: &'a Mat3) -> Self::Output {
        self.multiply(rhs)
    }
}

impl AddAssign for Mat3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Real> for Mat3 {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign<Real> for Mat3 {
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<'a> MulAssign<&'a Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: &'a Mat3) {
        *self = self.multiply(rhs);
    }
}
