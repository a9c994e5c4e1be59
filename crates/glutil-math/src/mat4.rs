// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{algebra::wedge, Mat3, Real, Vec3, Vec4};

/// Column‑major 4×4 matrix for affine and projective transforms.
///
/// - `x`, `y`, `z`, `w` are the **columns**; translation lives in `w`.
/// - Memory layout is 16 packed reals in column-major order, ready for GPU
///   uploads via [`Mat4::as_cols_slice`].
/// - `a * b` applies `a` to every column of `b` (`b` acts first on vectors).
/// - `Default` is the identity.
///
/// # Scalar constructor
/// [`Mat4::from_scalar`] keeps the `w` column at `(0, 0, 0, 1)` for every
/// `s`, so `Mat4::from_scalar(2.0)` is **not** `2 · I`. Use [`crate::scale`]
/// (or set the diagonal yourself) for a pure 4×4 scale.
///
/// # Examples
/// ```
/// use glutil_math::{Mat4, Vec3};
/// let t = glutil_math::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    /// First column.
    pub x: Vec4,
    /// Second column.
    pub y: Vec4,
    /// Third column.
    pub z: Vec4,
    /// Fourth column (translation for affine transforms).
    pub w: Vec4,
}

const _: () = assert!(core::mem::size_of::<Mat4>() == 16 * core::mem::size_of::<Real>());

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_scalar(1.0);

    /// Builds columns `(s,0,0,0)`, `(0,s,0,0)`, `(0,0,s,0)`, `(0,0,0,1)`.
    ///
    /// The `w` column's `w` stays `1` regardless of `s`; see the type-level
    /// docs.
    pub const fn from_scalar(s: Real) -> Self {
        Self::from_cols(
            Vec4::new(s, 0.0, 0.0, 0.0),
            Vec4::new(0.0, s, 0.0, 0.0),
            Vec4::new(0.0, 0.0, s, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Builds a matrix from its four columns.
    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self { x, y, z, w }
    }

    /// Embeds a linear map as the upper-left block with zero translation.
    pub const fn from_linear(m: Mat3) -> Self {
        Self::from_cols(
            Vec4::from_vec3(m.x, 0.0),
            Vec4::from_vec3(m.y, 0.0),
            Vec4::from_vec3(m.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Returns the upper-left 3×3 block.
    pub const fn linear(&self) -> Mat3 {
        Mat3::from_cols(self.x.truncate(), self.y.truncate(), self.z.truncate())
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_cols_array(self) -> [Real; 16] {
        bytemuck::cast(self)
    }

    /// Borrows the matrix as a column‑major array without copying.
    pub fn as_cols_slice(&self) -> &[Real; 16] {
        bytemuck::cast_ref(self)
    }

    /// Applies the matrix to a homogeneous vector (`self * v`).
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        self.x * v.x + self.y * v.y + self.z * v.z + self.w * v.w
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_vec3(*point, 1.0)).truncate()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_vec3(*direction, 0.0)).truncate()
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use glutil_math::{scale, Mat4, Vec3};
    /// let a = Mat4::IDENTITY;
    /// let b = scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.transform(&rhs.x),
            self.transform(&rhs.y),
            self.transform(&rhs.z),
            self.transform(&rhs.w),
        )
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec4::new(self.x.x, self.y.x, self.z.x, self.w.x),
            Vec4::new(self.x.y, self.y.y, self.z.y, self.w.y),
            Vec4::new(self.x.z, self.y.z, self.z.z, self.w.z),
            Vec4::new(self.x.w, self.y.w, self.z.w, self.w.w),
        )
    }

    /// `x · wedge(y, z, w)`.
    pub fn determinant(&self) -> Real {
        self.x.dot(&wedge(self.y, self.z, self.w))
    }

    /// Adjugate divided by the determinant.
    ///
    /// Adjugate rows are wedge products of the remaining three columns, with
    /// alternating signs. A singular matrix yields non-finite components; see
    /// [`crate::checked::inverse4`].
    pub fn inverse(&self) -> Self {
        let adjugate = Self::from_cols(
            wedge(self.y, self.z, self.w),
            -wedge(self.z, self.w, self.x),
            wedge(self.w, self.x, self.y),
            -wedge(self.x, self.y, self.z),
        )
        .transpose();
        adjugate / self.determinant()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[Real; 16]> for Mat4 {
    fn from(value: [Real; 16]) -> Self {
        bytemuck::cast(value)
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cols(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_cols(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_cols(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<Real> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self::Output {
        Self::from_cols(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Mat4> for Real {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}

impl Div<Real> for Mat4 {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Real) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform(&rhs)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &'a Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Real> for Mat4 {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign<Real> for Mat4 {
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<'a> MulAssign<&'a Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &'a Mat4) {
        *self = self.multiply(rhs);
    }
}
