// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glutil-math: fixed-size linear algebra for GL-style rendering pipelines.
//!
//! The crate provides 3- and 4-component vectors, 3×3 and 4×4 matrices, and
//! the free functions a renderer needs to build model, view, and projection
//! transforms.
//!
//! # Conventions
//! - Matrices store **columns**. `m.x`, `m.y`, `m.z` (and `m.w` for [`Mat4`])
//!   are column vectors, and `m * v` is `m.x * v.x + m.y * v.y + ...`.
//! - Translation lives in the last column ([`translation`]), so
//!   `translation(t) * Vec4::from_vec3(p, 1.0) == p + t`.
//! - Projections follow the right-handed OpenGL clip-space layout
//!   ([`frustum`], [`perspective`], [`orthogonal`]).
//! - [`Mat4::to_cols_array`] and [`Mat4::as_cols_slice`] yield the 16-float
//!   column-major block graphics APIs expect.
//!
//! # Degenerate inputs
//! The core operations never check their inputs. Dividing by zero,
//! normalising a zero-length vector, or inverting a singular matrix all follow
//! IEEE-754 and produce infinities or NaN in the result. Use the [`checked`]
//! module where inputs are not known to be well-conditioned; it rejects
//! degenerate inputs with a [`MathError`] and otherwise returns exactly what
//! the unchecked function would.
//!
//! ```
//! use glutil_math::{translation, Vec3, Vec4};
//! let p = translation(Vec3::new(3.0, 4.0, 5.0)) * Vec4::from_vec3(Vec3::new(1.0, 1.0, 1.0), 1.0);
//! assert_eq!(p.to_array(), [4.0, 5.0, 6.0, 1.0]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod algebra;
pub mod checked;
mod error;
mod mat3;
mod mat4;
mod projection;
mod tolerance;
mod vec3;
mod vec4;

pub use algebra::{
    cross, deg_to_rad, det, dot, inverse, rad_to_deg, rotation, scale, skew, translation,
    transpose, wedge, Dot, SquareMatrix,
};
pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use projection::{frustum, orthogonal, perspective, view};
pub use tolerance::{Tolerance, EPSILON};
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Scalar type used by every vector and matrix component.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Scalar type used by every vector and matrix component.
#[cfg(feature = "f64")]
pub type Real = f64;

/// Mathematical constants at the width of [`Real`].
#[cfg(not(feature = "f64"))]
pub use core::f32::consts;

/// Mathematical constants at the width of [`Real`].
#[cfg(feature = "f64")]
pub use core::f64::consts;
