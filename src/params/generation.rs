//! Point-cloud generation configuration.

/// Noise displacement parameters
#[derive(Debug, Clone)]
pub struct NoiseParams {
    /// Number of octaves summed by the noise field
    /// sketch value: 4
    pub octaves: u32,

    /// Per-octave amplitude multiplier (< 1, higher octaves contribute less)
    /// sketch value: 0.5
    pub falloff: f64,

    /// Spatial frequency of the displacement bumps (coordinate multiplier)
    pub scale: f32,

    /// Relative radial displacement bound
    /// sketch values: 0.09 - 0.13
    pub magnitude: f32,

    /// Constant coordinate offset keeping lookups off the lattice origin
    pub offset: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            falloff: 0.5,
            scale: 2.0,
            magnitude: 0.11,
            offset: 13.7,
        }
    }
}

/// Power-law density shaping for the polar coordinate
#[derive(Debug, Clone)]
pub struct DensityParams {
    /// Exponent `e` applied to the rank fraction before the random draw
    /// sketch value: 1.75
    pub exponent: f32,

    /// Further power `p` applied to the draw itself
    /// sketch value: 1.0
    pub power: f32,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            exponent: 1.75,
            power: 1.0,
        }
    }
}

/// Per-point color assignment policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorPolicy {
    /// No per-vertex colors; the shader falls back to its radial gradient
    None,

    /// Palette entry selected by point order (`i mod palette length`)
    RoundRobin,

    /// Palette entry drawn uniformly per point from the generation rng stream
    RandomFromPalette,
}

/// Full configuration for one generation pass
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of points to place on the sphere
    pub point_count: usize,

    /// Seed shared by the rng stream and the noise field
    pub seed: u32,

    pub noise: NoiseParams,
    pub density: DensityParams,

    /// Estimate a surface normal per point via finite differencing
    pub compute_normals: bool,

    pub color_policy: ColorPolicy,

    /// Ordered RGB palette (unit-range components)
    pub palette: Vec<[f32; 3]>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            point_count: 90_000,
            seed: 0x91FA_C742,
            noise: NoiseParams::default(),
            density: DensityParams::default(),
            compute_normals: false,
            color_policy: ColorPolicy::None,
            palette: default_palette(),
        }
    }
}

/// Warm sketch palette (coral, teal, amber, ink)
pub fn default_palette() -> Vec<[f32; 3]> {
    vec![
        [0.91, 0.34, 0.22],
        [0.24, 0.60, 0.56],
        [0.96, 0.73, 0.29],
        [0.20, 0.23, 0.30],
    ]
}

impl GenerationConfig {
    /// Validate configuration before generation begins
    pub fn validate(&self) -> Result<(), String> {
        if self.point_count == 0 {
            return Err("Point count must be > 0".to_string());
        }
        if self.noise.octaves == 0 {
            return Err("Octave count must be > 0".to_string());
        }
        for (name, value) in [
            ("scale", self.noise.scale),
            ("magnitude", self.noise.magnitude),
            ("offset", self.noise.offset),
        ] {
            if !value.is_finite() {
                return Err(format!("Noise {} must be finite, got {}", name, value));
            }
        }
        if !self.noise.falloff.is_finite() {
            return Err(format!(
                "Noise falloff must be finite, got {}",
                self.noise.falloff
            ));
        }
        if !self.density.exponent.is_finite() || !self.density.power.is_finite() {
            return Err("Density exponents must be finite".to_string());
        }
        if self.color_policy != ColorPolicy::None && self.palette.is_empty() {
            return Err("Palette must not be empty when a palette color policy is selected".to_string());
        }
        Ok(())
    }
}
