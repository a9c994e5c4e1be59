// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::{Real, Vec3};

/// Homogeneous 4D vector used with [`crate::Mat4`].
///
/// `w` carries the homogeneous coordinate: `1` for points, `0` for
/// directions. Arithmetic treats all four components alike; nothing here
/// performs a perspective divide.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    /// X component.
    pub x: Real,
    /// Y component.
    pub y: Real,
    /// Z component.
    pub z: Real,
    /// Homogeneous component.
    pub w: Real,
}

const _: () = assert!(core::mem::size_of::<Vec4>() == 4 * core::mem::size_of::<Real>());

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Extends a 3D vector with an explicit homogeneous component.
    pub const fn from_vec3(v: Vec3, w: Real) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops `w` and returns `(x, y, z)` without dividing.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Scales every component by a scalar.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    /// Component-wise product.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Four-term dot product.
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared magnitude over all four components, `x² + y² + z² + w²`.
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Vector length over all four components.
    pub fn length(&self) -> Real {
        self.length_squared().sqrt()
    }

    /// Divides the vector by its four-component length.
    ///
    /// A zero vector yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl From<[Real; 4]> for Vec4 {
    fn from(value: [Real; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vec4> for [Real; 4] {
    fn from(value: Vec4) -> Self {
        value.to_array()
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.hadamard(&rhs)
    }
}

impl Mul<Real> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec4> for Real {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<Real> for Vec4 {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Real) -> Self::Output {
        self.scale(1.0 / rhs)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<Real> for Vec4 {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign<Real> for Vec4 {
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}
