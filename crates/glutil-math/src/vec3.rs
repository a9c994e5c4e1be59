// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::Real;

/// 3D vector used for points, directions, and [`crate::Mat3`] columns.
///
/// * Components are plain public fields; there is no hidden invariant.
/// * `Default` is the zero vector.
/// * `*` between two vectors is the component-wise (Hadamard) product. Use
///   [`Vec3::dot`] or [`crate::cross`] for the inner and cross products.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    /// X component.
    pub x: Real,
    /// Y component.
    pub y: Real,
    /// Z component.
    pub z: Real,
}

const _: () = assert!(core::mem::size_of::<Vec3>() == 3 * core::mem::size_of::<Real>());

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: Real) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Component-wise product.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector (`self × other`).
    ///
    /// Anticommutative; the result is orthogonal to both operands and is zero
    /// exactly when they are parallel or either is zero.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Squared magnitude, `x² + y² + z²`.
    pub fn length_squared(&self) -> Real {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> Real {
        self.length_squared().sqrt()
    }

    /// Divides the vector by its length.
    ///
    /// A zero-length vector yields NaN components. See
    /// [`crate::checked::normalize3`] for a variant that reports the problem.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[Real; 3]> for Vec3 {
    fn from(value: [Real; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [Real; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.hadamard(&rhs)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for Real {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

// Division multiplies by the reciprocal, so `v / 0.0` scales by infinity.
impl Div<Real> for Vec3 {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Real) -> Self::Output {
        self.scale(1.0 / rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<Real> for Vec3 {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl DivAssign<Real> for Vec3 {
    fn div_assign(&mut self, rhs: Real) {
        *self = *self / rhs;
    }
}
