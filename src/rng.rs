//! Deterministic scalar random source for point generation.
//!
//! One generation pass owns exactly one `PointRng`; all per-point draws come
//! from this ordered stream, so a fixed seed reproduces the cloud bit for bit.

/// Seeded 32-bit generator: Weyl increment followed by two
/// xor-multiply-shift mixing rounds.
pub struct PointRng {
    state: u32,
}

impl PointRng {
    /// Create a new generator from an integer seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9E37_79B9);
        let mut z = self.state;
        z = (z ^ (z >> 16)).wrapping_mul(0x21F0_AAAD);
        z = (z ^ (z >> 15)).wrapping_mul(0x735A_2D97);
        z ^ (z >> 15)
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits: every value is exactly representable in f32
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
    }

    /// Uniform draw in `[a, b)`
    pub fn range(&mut self, a: f32, b: f32) -> f32 {
        a + (b - a) * self.next_f32()
    }
}
