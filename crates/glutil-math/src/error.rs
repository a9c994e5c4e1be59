// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

use crate::Real;

/// Degenerate input rejected by the [`crate::checked`] operations.
///
/// The unchecked operations never produce this; they let IEEE-754 infinities
/// and NaN flow into the result instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector that must be normalised has (near-)zero length.
    #[error("cannot normalize a vector of length {length}")]
    ZeroLength {
        /// Length of the offending vector.
        length: Real,
    },

    /// A matrix that must be inverted has a (near-)zero determinant.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant of the offending matrix.
        determinant: Real,
    },

    /// A projection volume has (near-)zero extent along one axis.
    #[error("projection volume is degenerate along {axis} (extent {extent})")]
    DegenerateVolume {
        /// Axis name (`"x"`, `"y"`, or `"z"`).
        axis: &'static str,
        /// `right - left`, `top - bottom`, or `far - near`.
        extent: Real,
    },

    /// The camera `up` and `forward` directions are parallel or zero.
    #[error("view basis is degenerate: up and forward are parallel or zero")]
    ParallelBasis,

    /// An input or intermediate value is infinite or NaN.
    #[error("{what} is not finite")]
    NonFinite {
        /// What was being checked.
        what: &'static str,
    },
}
