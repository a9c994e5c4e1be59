// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Real;

/// Default absolute threshold used when detecting degenerate values.
pub const EPSILON: Real = 1e-6;

/// Thresholds the [`crate::checked`] operations use to call an input degenerate.
///
/// A quantity `q` measured against a reference magnitude `r` is treated as
/// zero when `|q| <= max(absolute, relative * |r|)`.
///
/// ```
/// use glutil_math::Tolerance;
/// let tol = Tolerance::new(1e-6, 0.5);
/// assert_eq!(tol.allowed_error(0.0), 1e-6);
/// assert_eq!(tol.allowed_error(-4.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Floor applied regardless of scale.
    pub absolute: Real,
    /// Fraction of the reference magnitude.
    pub relative: Real,
}

impl Tolerance {
    /// Builds a tolerance from explicit thresholds.
    pub const fn new(absolute: Real, relative: Real) -> Self {
        Self { absolute, relative }
    }

    /// Largest error accepted for a quantity of magnitude `reference`.
    pub fn allowed_error(&self, reference: Real) -> Real {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `value` is indistinguishable from zero relative to
    /// `reference`.
    pub fn is_negligible(&self, value: Real, reference: Real) -> bool {
        value.abs() <= self.allowed_error(reference)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(EPSILON, EPSILON)
    }
}
