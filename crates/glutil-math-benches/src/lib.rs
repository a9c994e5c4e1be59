// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the glutil-math benchmarks.

use glutil_math::{rotation, translation, Mat4, Real, Vec3};

/// Builds `n` distinct, well-conditioned model matrices.
pub fn model_matrices(n: usize) -> Vec<Mat4> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as Real;
            let spin = Mat4::from_linear(rotation(t * 0.1, Vec3::new(1.0, t, 0.5)));
            translation(Vec3::new(t, -t, 0.5 * t)) * spin
        })
        .collect()
}
