//! Layered coherent-noise field for radial displacement.
//!
//! Wraps OpenSimplex (smooth, artifact-free 3D noise) and sums octaves with
//! a falloff-weighted amplitude chain starting at `falloff` itself, so the
//! weights total below 1 and the aggregate stays inside `[0,1]`. Each octave
//! samples the field at the coordinate *divided* by the current amplitude
//! rather than at a doubled frequency; for falloff 0.5 the ladders coincide,
//! but the division form is the sampled behavior and tests pin it down.
//! Do not "fix" it.

use noise::{NoiseFn, OpenSimplex};

/// Immutable multi-octave noise configuration over a seeded OpenSimplex table.
pub struct NoiseField {
    simplex: OpenSimplex,
    octaves: u32,
    falloff: f64,
}

impl NoiseField {
    /// Create a new field with seed, octave count and per-octave falloff
    pub fn new(seed: u32, octaves: u32, falloff: f64) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
            octaves,
            falloff,
        }
    }

    /// Single-octave field (direct remapped primitive)
    pub fn single(seed: u32) -> Self {
        Self::new(seed, 1, 0.5)
    }

    /// Sample the field at a 3D position.
    ///
    /// Pure function of the inputs and the field's seed. Single-octave
    /// output lies in `[0,1]`; multi-octave output is the falloff-weighted
    /// sum of remapped octaves and is left unrenormalized.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        if self.octaves <= 1 {
            return remap_unit(self.simplex.get([x, y, z]));
        }

        let mut total = 0.0;
        let mut amplitude = self.falloff;
        for _ in 0..self.octaves {
            let raw = self
                .simplex
                .get([x / amplitude, y / amplitude, z / amplitude]);
            total += amplitude * remap_unit(raw);
            amplitude *= self.falloff;
        }
        total
    }
}

/// Remap the primitive's native `[-1,1]` range to `[0,1]`
fn remap_unit(n: f64) -> f64 {
    0.5 * (n + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        let a = NoiseField::new(42, 4, 0.5);
        let b = NoiseField::new(42, 4, 0.5);

        for i in 0..100 {
            let p = i as f64 * 0.37;
            assert_eq!(a.sample(p, -p, 2.0 * p), b.sample(p, -p, 2.0 * p));
        }
    }

    #[test]
    fn test_seeds_produce_distinct_fields() {
        let a = NoiseField::new(1, 4, 0.5);
        let b = NoiseField::new(2, 4, 0.5);

        let same = (0..50)
            .filter(|i| {
                let p = *i as f64 * 0.61 + 0.13;
                a.sample(p, p, p) == b.sample(p, p, p)
            })
            .count();
        assert!(same < 5);
    }

    #[test]
    fn test_single_octave_in_unit_range() {
        let field = NoiseField::single(7);
        for i in 0..1000 {
            let p = i as f64 * 0.173 - 80.0;
            let v = field.sample(p, 0.5 * p, -0.25 * p);
            assert!((0.0..=1.0).contains(&v), "sample {} out of [0,1]", v);
        }
    }

    #[test]
    fn test_octave_sum_matches_amplitude_chain() {
        // Pin the exact layering: amplitude falloff^k, coordinate divided by
        // the current amplitude, per-octave remap to [0,1] before weighting.
        let field = NoiseField::new(9, 4, 0.5);
        let simplex = OpenSimplex::new(9);

        let (x, y, z) = (1.7, -0.4, 3.2);
        let mut expected = 0.0;
        let mut amplitude = 0.5;
        for _ in 0..4 {
            let raw = simplex.get([x / amplitude, y / amplitude, z / amplitude]);
            expected += amplitude * 0.5 * (raw + 1.0);
            amplitude *= 0.5;
        }

        assert_eq!(field.sample(x, y, z), expected);
    }

    #[test]
    fn test_octave_sum_stays_in_unit_range() {
        // 4 octaves at falloff 0.5: weights total 0.9375, each octave in [0,1]
        let field = NoiseField::new(3, 4, 0.5);
        for i in 0..1000 {
            let p = i as f64 * 0.291 - 140.0;
            let v = field.sample(p, -0.7 * p, 0.3 * p);
            assert!((0.0..=1.0).contains(&v), "sample {} out of bounds", v);
        }
    }
}
