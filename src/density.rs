//! Density sampler: maps a point's rank among N to a polar coordinate.
//!
//! The power-law chain biases points toward the `y = 1` pole: the draw
//! ceiling `f^e` grows with the index, so early indices stay near the top
//! of the sphere while later ones can reach the bottom. The banding the
//! visual depends on comes from this exact exponent chain.

use std::f32::consts::TAU;

use crate::params::DensityParams;
use crate::rng::PointRng;

/// Ephemeral spherical sample: height coordinate and azimuth
#[derive(Debug, Clone, Copy)]
pub struct SamplePoint {
    /// Polar coordinate in `[-1, 1]` (sphere height, stands in for latitude)
    pub y: f32,
    /// Azimuth in `[0, 2π)`
    pub phi: f32,
}

/// Draw the spherical sample for point `i` of `n`.
///
/// Draw order is fixed (polar first, then azimuth) and must be called in
/// index order on a single rng stream for reproducible output.
pub fn sample_point(i: usize, n: usize, params: &DensityParams, rng: &mut PointRng) -> SamplePoint {
    // Small positive offset keeps f away from exactly 0 at i = 0
    let s = 0.01 * n as f32;
    let f = (i as f32 + s) / (n as f32 + s);

    let l = rng.range(0.0, f.powf(params.exponent));
    let y = 1.0 - 2.0 * l.powf(params.power);
    let phi = rng.range(0.0, TAU);

    SamplePoint { y, phi }
}
